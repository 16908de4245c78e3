use crate::models::{Genre, Language};

/// Curated titles per (genre, language), five per pair
pub(super) const CURATED: &[(Genre, Language, &[&str])] = &[
    (
        Genre::Drama,
        Language::English,
        &[
            "The Pursuit of Happiness",
            "A Beautiful Mind",
            "Forrest Gump",
            "The Shawshank Redemption",
            "Good Will Hunting",
        ],
    ),
    (
        Genre::Drama,
        Language::Hindi,
        &[
            "Taare Zameen Par",
            "Dangal",
            "Pink",
            "Anand",
            "Mughal-E-Azam",
        ],
    ),
    (
        Genre::Drama,
        Language::Telugu,
        &[
            "Baahubali",
            "Arjun Reddy",
            "Mahanati",
            "Jersey",
            "Sita Ramam",
        ],
    ),
    (
        Genre::Drama,
        Language::Tamil,
        &[
            "Kaaka Muttai",
            "Visaranai",
            "Asuran",
            "Pariyerum Perumal",
            "Vada Chennai",
        ],
    ),
    (
        Genre::Drama,
        Language::Malayalam,
        &[
            "Drishyam",
            "Kumbakonam Gopals",
            "Maheshinte Prathikaaram",
            "Angamaly Diaries",
            "Thondimuthalum Driksakshiyum",
        ],
    ),
    (
        Genre::Drama,
        Language::Kannada,
        &[
            "Kirik Party",
            "Lucia",
            "Ulidavaru Kandanthe",
            "Thithi",
            "Ondu Motteya Kathe",
        ],
    ),
    (
        Genre::Action,
        Language::English,
        &[
            "Mad Max: Fury Road",
            "John Wick",
            "The Dark Knight",
            "Avengers: Endgame",
            "Mission: Impossible",
        ],
    ),
    (
        Genre::Action,
        Language::Hindi,
        &[
            "War",
            "Pathaan",
            "Baaghi",
            "Dhoom",
            "Krrish",
        ],
    ),
    (
        Genre::Action,
        Language::Telugu,
        &[
            "RRR",
            "Pushpa",
            "Saaho",
            "Baahubali 2",
            "Ala Vaikunthapurramuloo",
        ],
    ),
    (
        Genre::Action,
        Language::Tamil,
        &[
            "Master",
            "Vikram",
            "Beast",
            "Bigil",
            "Sarkar",
        ],
    ),
    (
        Genre::Action,
        Language::Malayalam,
        &[
            "Lucifer",
            "Big Brother",
            "Pulimurugan",
            "Abrahaminte Santhathikal",
            "The Great Father",
        ],
    ),
    (
        Genre::Action,
        Language::Kannada,
        &[
            "KGF",
            "Roberrt",
            "Avane Srimannarayana",
            "Hebbuli",
            "The Villain",
        ],
    ),
    (
        Genre::Comedy,
        Language::English,
        &[
            "The Hangover",
            "Superbad",
            "Anchorman",
            "Dumb and Dumber",
            "Borat",
        ],
    ),
    (
        Genre::Comedy,
        Language::Hindi,
        &[
            "Hera Pheri",
            "Andaz Apna Apna",
            "Munna Bhai MBBS",
            "Golmaal",
            "3 Idiots",
        ],
    ),
    (
        Genre::Comedy,
        Language::Telugu,
        &[
            "F2: Fun and Frustration",
            "Venky Mama",
            "Hello Guru Prema Kosame",
            "Bhale Bhale Magadivoy",
            "Pelli Choopulu",
        ],
    ),
    (
        Genre::Comedy,
        Language::Tamil,
        &[
            "Soodhu Kavvum",
            "Naduvula Konjam Pakkatha Kaanom",
            "Kaththi Sandai",
            "Comali",
            "Doctor",
        ],
    ),
    (
        Genre::Comedy,
        Language::Malayalam,
        &[
            "In Harihar Nagar",
            "Ramji Rao Speaking",
            "Godha",
            "Kattappanayile Rithwik Roshan",
            "Maheshinte Prathikaaram",
        ],
    ),
    (
        Genre::Comedy,
        Language::Kannada,
        &[
            "Kirik Party",
            "Chamak",
            "Googly",
            "Lifeu Ishtene",
            "Gultoo",
        ],
    ),
    (
        Genre::Horror,
        Language::English,
        &[
            "The Conjuring",
            "Hereditary",
            "Get Out",
            "A Quiet Place",
            "The Babadook",
        ],
    ),
    (
        Genre::Horror,
        Language::Hindi,
        &[
            "Stree",
            "Tumhari Sulu",
            "Pari",
            "Raaz",
            "Bhoot",
        ],
    ),
    (
        Genre::Horror,
        Language::Telugu,
        &[
            "Awe!",
            "Gruham",
            "Raju Gari Gadhi",
            "Prema Katha Chitram",
            "Geethanjali",
        ],
    ),
    (
        Genre::Horror,
        Language::Tamil,
        &[
            "Demonte Colony",
            "Yaamirukka Bayamey",
            "Pisaasu",
            "Maya",
            "Aval",
        ],
    ),
    (
        Genre::Horror,
        Language::Malayalam,
        &[
            "Ezra",
            "Pretham",
            "Bhoothakaalam",
            "Anveshanam",
            "Chathur Mukham",
        ],
    ),
    (
        Genre::Horror,
        Language::Kannada,
        &[
            "Shivalinga",
            "Aake",
            "Karvva",
            "Mummy: Save Me",
            "Namo Bhootatma",
        ],
    ),
    (
        Genre::Crime,
        Language::English,
        &[
            "The Godfather",
            "Goodfellas",
            "Pulp Fiction",
            "Scarface",
            "The Departed",
        ],
    ),
    (
        Genre::Crime,
        Language::Hindi,
        &[
            "Gangs of Wasseypur",
            "Sacred Games",
            "Mirzapur",
            "Scam 1992",
            "Mumbai Saga",
        ],
    ),
    (
        Genre::Crime,
        Language::Telugu,
        &[
            "Kshanam",
            "Goodachari",
            "Agent Sai Srinivasa Athreya",
            "HIT",
            "V",
        ],
    ),
    (
        Genre::Crime,
        Language::Tamil,
        &[
            "Vikram Vedha",
            "Kaithi",
            "Theeran Adhigaaram Ondru",
            "Ratsasan",
            "Pizza",
        ],
    ),
    (
        Genre::Crime,
        Language::Malayalam,
        &[
            "Mumbai Police",
            "Memories",
            "CBI Series",
            "Joseph",
            "Anjaam Pathiraa",
        ],
    ),
    (
        Genre::Crime,
        Language::Kannada,
        &[
            "Tagaru",
            "Birbal Trilogy",
            "Kavaludaari",
            "Kanoora Heggadati",
            "Aa Karaala Ratri",
        ],
    ),
    (
        Genre::Fantasy,
        Language::English,
        &[
            "The Lord of the Rings",
            "Harry Potter",
            "Pan's Labyrinth",
            "The Shape of Water",
            "Life of Pi",
        ],
    ),
    (
        Genre::Fantasy,
        Language::Hindi,
        &[
            "Haider",
            "Tumhari Sulu",
            "Brahmastra",
            "Koi... Mil Gaya",
            "Mr. India",
        ],
    ),
    (
        Genre::Fantasy,
        Language::Telugu,
        &[
            "Eega",
            "Magadheera",
            "Arundhati",
            "Yamadonga",
            "Annamayya",
        ],
    ),
    (
        Genre::Fantasy,
        Language::Tamil,
        &[
            "Enthiran",
            "7aum Arivu",
            "I",
            "Kochadaiiyaan",
            "Maayavan",
        ],
    ),
    (
        Genre::Fantasy,
        Language::Malayalam,
        &[
            "Manichithrathazhu",
            "Bhramaram",
            "Kummatty",
            "My Dear Kuttichathan",
            "Athbhutha Dweepu",
        ],
    ),
    (
        Genre::Fantasy,
        Language::Kannada,
        &[
            "Upendra",
            "A",
            "Super",
            "Shiva Mechida Kannappa",
            "Apthamitra",
        ],
    ),
    (
        Genre::Thriller,
        Language::English,
        &[
            "Se7en",
            "Zodiac",
            "Gone Girl",
            "Shutter Island",
            "The Silence of the Lambs",
        ],
    ),
    (
        Genre::Thriller,
        Language::Hindi,
        &[
            "Kahaani",
            "Talaash",
            "Drishyam",
            "Te3n",
            "Badla",
        ],
    ),
    (
        Genre::Thriller,
        Language::Telugu,
        &[
            "Kshanam",
            "Evaru",
            "Goodachari",
            "Agent Sai Srinivasa Athreya",
            "HIT",
        ],
    ),
    (
        Genre::Thriller,
        Language::Tamil,
        &[
            "Ratsasan",
            "Thani Oruvan",
            "Yennai Arindhaal",
            "Dhuruvangal Pathinaaru",
            "Kuttram 23",
        ],
    ),
    (
        Genre::Thriller,
        Language::Malayalam,
        &[
            "Drishyam",
            "Memories",
            "Forensic",
            "Anjaam Pathiraa",
            "The Great Indian Kitchen",
        ],
    ),
    (
        Genre::Thriller,
        Language::Kannada,
        &[
            "Kavaludaari",
            "U Turn",
            "Aa Karaala Ratri",
            "Birbal Trilogy",
            "Kanoora Heggadati",
        ],
    ),
    (
        Genre::Romance,
        Language::English,
        &[
            "The Notebook",
            "Titanic",
            "Casablanca",
            "When Harry Met Sally",
            "La La Land",
        ],
    ),
    (
        Genre::Romance,
        Language::Hindi,
        &[
            "Dilwale Dulhania Le Jayenge",
            "Kuch Kuch Hota Hai",
            "Jab We Met",
            "Zindagi Na Milegi Dobara",
            "Yeh Jawaani Hai Deewani",
        ],
    ),
    (
        Genre::Romance,
        Language::Telugu,
        &[
            "Geetha Govindam",
            "Arjun Reddy",
            "Ninnu Kori",
            "Tholi Prema",
            "Fidaa",
        ],
    ),
    (
        Genre::Romance,
        Language::Tamil,
        &[
            "96",
            "Vinnaithaandi Varuvaayaa",
            "Alaipayuthey",
            "Kaadhal",
            "OK Kanmani",
        ],
    ),
    (
        Genre::Romance,
        Language::Malayalam,
        &[
            "Premam",
            "Bangalore Days",
            "Ustad Hotel",
            "Charlie",
            "Ennu Ninte Moideen",
        ],
    ),
    (
        Genre::Romance,
        Language::Kannada,
        &[
            "Mungaru Male",
            "Googly",
            "Milana",
            "Gaalipata",
            "Chamak",
        ],
    ),
];
