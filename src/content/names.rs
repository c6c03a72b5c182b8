//! The 99 Names of Allah.

use once_cell::sync::Lazy;

use crate::models::{ContentItem, ContentType};

/// One row of the names table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry {
    pub transliteration: &'static str,
    pub arabic: &'static str,
    pub meaning: &'static str,
    pub description: &'static str,
}

pub const NAMES: [NameEntry; 99] = [
    NameEntry {
        transliteration: "Ar-Rahman",
        arabic: "الرَّحْمَنُ",
        meaning: "The Most Gracious",
        description: "The One who has plenty of mercy for the believers and the blasphemers in this world and specifically for the believers in the Hereafter.",
    },
    NameEntry {
        transliteration: "Ar-Raheem",
        arabic: "الرَّحِيمُ",
        meaning: "The Most Merciful",
        description: "The One who has plenty of mercy for the believers.",
    },
    NameEntry {
        transliteration: "Al-Malik",
        arabic: "الْمَلِكُ",
        meaning: "The King",
        description: "The One with the complete Dominion, the One Whose Dominion is clear from imperfection.",
    },
    NameEntry {
        transliteration: "Al-Quddus",
        arabic: "الْقُدُّوسُ",
        meaning: "The Most Holy",
        description: "The One who is pure from any imperfection and clear from children and adversaries.",
    },
    NameEntry {
        transliteration: "As-Salam",
        arabic: "السَّلاَمُ",
        meaning: "The Source of Peace",
        description: "The One who is free from every imperfection.",
    },
    NameEntry {
        transliteration: "Al-Mu'min",
        arabic: "الْمُؤْمِنُ",
        meaning: "The Guardian of Faith",
        description: "The One who witnessed for Himself that no one is God but Him. And He witnessed for His believers that they are truthful in their belief that no one is God but Him.",
    },
    NameEntry {
        transliteration: "Al-Muhaymin",
        arabic: "الْمُهَيْمِنُ",
        meaning: "The Protector",
        description: "The One who witnesses the saying and deeds of His creatures.",
    },
    NameEntry {
        transliteration: "Al-Aziz",
        arabic: "الْعَزِيزُ",
        meaning: "The All Mighty",
        description: "The Defeater who is not defeated.",
    },
    NameEntry {
        transliteration: "Al-Jabbar",
        arabic: "الْجَبَّارُ",
        meaning: "The Compeller",
        description: "The One that nothing happens in His Dominion except that which He willed.",
    },
    NameEntry {
        transliteration: "Al-Mutakabbir",
        arabic: "الْمُتَكَبِّرُ",
        meaning: "The Supreme",
        description: "The One who is clear from the attributes of the creatures and from resembling them.",
    },
    NameEntry {
        transliteration: "Al-Khaliq",
        arabic: "الْخَالِقُ",
        meaning: "The Creator",
        description: "The One who brings everything from non-existence to existence.",
    },
    NameEntry {
        transliteration: "Al-Bari",
        arabic: "الْبَارِئُ",
        meaning: "The Evolver",
        description: "The Maker, The Creator who has the Power to turn the entities.",
    },
    NameEntry {
        transliteration: "Al-Musawwir",
        arabic: "الْمُصَوِّرُ",
        meaning: "The Fashioner",
        description: "The One who forms His creatures in different pictures.",
    },
    NameEntry {
        transliteration: "Al-Ghaffar",
        arabic: "الْغَفَّارُ",
        meaning: "The Ever-Forgiving",
        description: "The One who forgives the sins of His slaves time and time again.",
    },
    NameEntry {
        transliteration: "Al-Qahhar",
        arabic: "الْقَهَّارُ",
        meaning: "The Subduer",
        description: "The Dominant, The One who has the perfect Power and is not unable over anything.",
    },
    NameEntry {
        transliteration: "Al-Wahhab",
        arabic: "الْوَهَّابُ",
        meaning: "The Bestower",
        description: "The One who is Generous in giving plenty without any return.",
    },
    NameEntry {
        transliteration: "Ar-Razzaq",
        arabic: "الرَّزَّاقُ",
        meaning: "The Provider",
        description: "The One who gives the Rizq.",
    },
    NameEntry {
        transliteration: "Al-Fattah",
        arabic: "الْفَتَّاحُ",
        meaning: "The Opener",
        description: "The One who opens for His slaves the closed worldly and religious matters.",
    },
    NameEntry {
        transliteration: "Al-Alim",
        arabic: "الْعَلِيمُ",
        meaning: "The All-Knowing",
        description: "The Knowledgeable; The One nothing is absent from His knowledge.",
    },
    NameEntry {
        transliteration: "Al-Qabid",
        arabic: "الْقَابِضُ",
        meaning: "The Withholder",
        description: "The One who constricts the sustenance.",
    },
    NameEntry {
        transliteration: "Al-Basit",
        arabic: "الْبَاسِطُ",
        meaning: "The Expander",
        description: "The One who expands and widens His munificence.",
    },
    NameEntry {
        transliteration: "Al-Khafid",
        arabic: "الْخَافِضُ",
        meaning: "The Abaser",
        description: "The One who lowers whoever He willed by His Destruction.",
    },
    NameEntry {
        transliteration: "Ar-Rafi",
        arabic: "الرَّافِعُ",
        meaning: "The Exalter",
        description: "The One who raises whoever He willed by His Endowment.",
    },
    NameEntry {
        transliteration: "Al-Mu'izz",
        arabic: "الْمُعِزُ",
        meaning: "The Bestower of Honors",
        description: "He gives esteem to whoever He willed, hence there is no one to degrade him.",
    },
    NameEntry {
        transliteration: "Al-Mudhill",
        arabic: "الْمُذِلُ",
        meaning: "The Dishonorer",
        description: "He degrades whoever He willed, hence there is no one to give him esteem.",
    },
    NameEntry {
        transliteration: "As-Sami",
        arabic: "السَّمِيعُ",
        meaning: "The All-Hearing",
        description: "The One who Hears all things that are heard by His Eternal Hearing without an ear, instrument or organ.",
    },
    NameEntry {
        transliteration: "Al-Basir",
        arabic: "الْبَصِيرُ",
        meaning: "The All-Seeing",
        description: "The One who Sees all things that are seen by His Eternal Seeing without a pupil or any other instrument.",
    },
    NameEntry {
        transliteration: "Al-Hakam",
        arabic: "الْحَكَمُ",
        meaning: "The Judge",
        description: "He is the Ruler and His judgment is His Word.",
    },
    NameEntry {
        transliteration: "Al-Adl",
        arabic: "الْعَدْلُ",
        meaning: "The Just",
        description: "The One who is entitled to do what He does. He is not unjust.",
    },
    NameEntry {
        transliteration: "Al-Latif",
        arabic: "اللَّطِيفُ",
        meaning: "The Subtle One",
        description: "The One who is kind to His slaves and endows upon them.",
    },
    NameEntry {
        transliteration: "Al-Khabir",
        arabic: "الْخَبِيرُ",
        meaning: "The All-Aware",
        description: "The One who knows the truth of things.",
    },
    NameEntry {
        transliteration: "Al-Halim",
        arabic: "الْحَلِيمُ",
        meaning: "The Forbearing",
        description: "The One who delays the punishment for those who deserve it and then He might forgive them.",
    },
    NameEntry {
        transliteration: "Al-Azim",
        arabic: "الْعَظِيمُ",
        meaning: "The Magnificent",
        description: "The One deserving the attributes of Exaltment, Glory, Extolment, and Purity from all imperfection.",
    },
    NameEntry {
        transliteration: "Al-Ghafur",
        arabic: "الْغَفُورُ",
        meaning: "The Forgiver",
        description: "The One who forgives a lot.",
    },
    NameEntry {
        transliteration: "Ash-Shakur",
        arabic: "الشَّكُورُ",
        meaning: "The Appreciative",
        description: "The One who gives a lot of reward for a little obedience.",
    },
    NameEntry {
        transliteration: "Al-Ali",
        arabic: "الْعَلِيُ",
        meaning: "The Most High",
        description: "The One who is clear from the attributes of the creatures.",
    },
    NameEntry {
        transliteration: "Al-Kabir",
        arabic: "الْكَبِيرُ",
        meaning: "The Most Great",
        description: "The One who is greater than everything in status.",
    },
    NameEntry {
        transliteration: "Al-Hafiz",
        arabic: "الْحَفِيظُ",
        meaning: "The Preserver",
        description: "The One who protects whatever and whoever He willed to protect.",
    },
    NameEntry {
        transliteration: "Al-Muqit",
        arabic: "الْمُقِيتُ",
        meaning: "The Maintainer",
        description: "The One who has the Power.",
    },
    NameEntry {
        transliteration: "Al-Hasib",
        arabic: "الْحَسِيبُ",
        meaning: "The Reckoner",
        description: "The One who gives the satisfaction.",
    },
    NameEntry {
        transliteration: "Al-Jalil",
        arabic: "الْجَلِيلُ",
        meaning: "The Sublime One",
        description: "The One who is attributed with greatness of Power and Glory of status.",
    },
    NameEntry {
        transliteration: "Al-Karim",
        arabic: "الْكَرِيمُ",
        meaning: "The Generous",
        description: "The One who is clear from abjectness.",
    },
    NameEntry {
        transliteration: "Ar-Raqib",
        arabic: "الرَّقِيبُ",
        meaning: "The Watchful",
        description: "The One that nothing is absent from Him. Hence it's meaning is related to the attribute of Knowledge.",
    },
    NameEntry {
        transliteration: "Al-Mujib",
        arabic: "الْمُجِيبُ",
        meaning: "The Responsive",
        description: "The One who answers the one in need if he asks Him and rescues the yearner if he calls upon Him.",
    },
    NameEntry {
        transliteration: "Al-Wasi",
        arabic: "الْوَاسِعُ",
        meaning: "The All-Encompassing",
        description: "The Knowledgeable.",
    },
    NameEntry {
        transliteration: "Al-Hakim",
        arabic: "الْحَكِيمُ",
        meaning: "The Wise",
        description: "The One who is correct in His acts.",
    },
    NameEntry {
        transliteration: "Al-Wadud",
        arabic: "الْوَدُودُ",
        meaning: "The Loving",
        description: "The One who loves His believing slaves and His believing slaves love Him.",
    },
    NameEntry {
        transliteration: "Al-Majid",
        arabic: "الْمَجِيدُ",
        meaning: "The Glorious",
        description: "The One who is with perfect Power, High Status, Compassion, Generosity and Kindness.",
    },
    NameEntry {
        transliteration: "Al-Ba'ith",
        arabic: "الْبَاعِثُ",
        meaning: "The Resurrecter",
        description: "The One who resurrects the creatures after they have been nonexistent and dead.",
    },
    NameEntry {
        transliteration: "Ash-Shahid",
        arabic: "الشَّهِيدُ",
        meaning: "The Witness",
        description: "The One who nothing is absent from Him.",
    },
    NameEntry {
        transliteration: "Al-Haqq",
        arabic: "الْحَقُ",
        meaning: "The Truth",
        description: "The One who truly exists.",
    },
    NameEntry {
        transliteration: "Al-Wakil",
        arabic: "الْوَكِيلُ",
        meaning: "The Trustee",
        description: "The One who gives the satisfaction and is relied upon.",
    },
    NameEntry {
        transliteration: "Al-Qawiyy",
        arabic: "الْقَوِيُ",
        meaning: "The Strong",
        description: "The One with the complete Power.",
    },
    NameEntry {
        transliteration: "Al-Matin",
        arabic: "الْمَتِينُ",
        meaning: "The Firm",
        description: "The One with extreme Power which is un-interrupted and He does not get tired.",
    },
    NameEntry {
        transliteration: "Al-Waliyy",
        arabic: "الْوَلِيُ",
        meaning: "The Protecting Friend",
        description: "The Supporter, the Lover.",
    },
    NameEntry {
        transliteration: "Al-Hamid",
        arabic: "الْحَمِيدُ",
        meaning: "The Praiseworthy",
        description: "The praised One who deserves to be praised.",
    },
    NameEntry {
        transliteration: "Al-Muhsi",
        arabic: "الْمُحْصِي",
        meaning: "The Counter",
        description: "The One who the count of things are known to him.",
    },
    NameEntry {
        transliteration: "Al-Mubdi",
        arabic: "الْمُبْدِئُ",
        meaning: "The Originator",
        description: "The One who started the human being. That is, He created him.",
    },
    NameEntry {
        transliteration: "Al-Mu'id",
        arabic: "الْمُعِيدُ",
        meaning: "The Restorer",
        description: "The One who brings back the creatures after death.",
    },
    NameEntry {
        transliteration: "Al-Muhyi",
        arabic: "الْمُحْيِي",
        meaning: "The Giver of Life",
        description: "The One who took out a living human from semen that does not have a soul. He gives life by giving the souls back to the worn out bodies on the resurrection day and He makes the hearts alive by the light of knowledge.",
    },
    NameEntry {
        transliteration: "Al-Mumit",
        arabic: "الْمُمِيتُ",
        meaning: "The Destroyer",
        description: "The One who renders the living dead.",
    },
    NameEntry {
        transliteration: "Al-Hayy",
        arabic: "الْحَيُ",
        meaning: "The Ever-Living",
        description: "The One attributed with a life that is unlike our life and is not that of a combination of soul, flesh or blood.",
    },
    NameEntry {
        transliteration: "Al-Qayyum",
        arabic: "الْقَيُّومُ",
        meaning: "The Self-Subsisting",
        description: "The One who remains and does not end.",
    },
    NameEntry {
        transliteration: "Al-Wajid",
        arabic: "الْوَاجِدُ",
        meaning: "The Finder",
        description: "The Rich who is never poor. Al-Wajid is Richness.",
    },
    NameEntry {
        transliteration: "Al-Majid",
        arabic: "الْمَاجِدُ",
        meaning: "The Noble",
        description: "The One who is Majid.",
    },
    NameEntry {
        transliteration: "Al-Wahid",
        arabic: "الْوَاحِدُ",
        meaning: "The Unique",
        description: "The One without a partner.",
    },
    NameEntry {
        transliteration: "Al-Ahad",
        arabic: "الأَحَد",
        meaning: "The One",
        description: "The only One.",
    },
    NameEntry {
        transliteration: "As-Samad",
        arabic: "الصَّمَدُ",
        meaning: "The Eternal",
        description: "The Master who is relied upon in matters and reverted to in ones needs.",
    },
    NameEntry {
        transliteration: "Al-Qadir",
        arabic: "الْقَادِرُ",
        meaning: "The Able",
        description: "The One attributed with Power.",
    },
    NameEntry {
        transliteration: "Al-Muqtadir",
        arabic: "الْمُقْتَدِرُ",
        meaning: "The Powerful",
        description: "The One with the perfect Power that nothing is withheld from Him.",
    },
    NameEntry {
        transliteration: "Al-Muqaddim",
        arabic: "الْمُقَدِّمُ",
        meaning: "The Expediter",
        description: "The One who puts things in their right places. He makes ahead what He wills and delays what He wills.",
    },
    NameEntry {
        transliteration: "Al-Mu'akhkhir",
        arabic: "الْمُؤَخِّرُ",
        meaning: "The Delayer",
        description: "The One who puts things in their right places. He makes ahead what He wills and delays what He wills.",
    },
    NameEntry {
        transliteration: "Al-Awwal",
        arabic: "الأَوَّلُ",
        meaning: "The First",
        description: "The One whose Existence is without a beginning.",
    },
    NameEntry {
        transliteration: "Al-Akhir",
        arabic: "الآخِرُ",
        meaning: "The Last",
        description: "The One whose Existence is without an end.",
    },
    NameEntry {
        transliteration: "Az-Zahir",
        arabic: "الظَّاهِرُ",
        meaning: "The Manifest",
        description: "The One that nothing is above Him and nothing is underneath Him, hence He exists without a place.",
    },
    NameEntry {
        transliteration: "Al-Batin",
        arabic: "الْبَاطِنُ",
        meaning: "The Hidden",
        description: "The One that nothing is above Him and nothing is underneath Him, hence He exists without a place.",
    },
    NameEntry {
        transliteration: "Al-Wali",
        arabic: "الْوَالِي",
        meaning: "The Governor",
        description: "The One who owns things and manages them.",
    },
    NameEntry {
        transliteration: "Al-Muta'ali",
        arabic: "الْمُتَعَالِي",
        meaning: "The Most Exalted",
        description: "The One who is clear from the attributes of the creation.",
    },
    NameEntry {
        transliteration: "Al-Barr",
        arabic: "الْبَرُّ",
        meaning: "The Source of Goodness",
        description: "The One who is kind to His creatures, who covered them with His sustenance and specified whoever He willed among them by His support, protection, and special mercy.",
    },
    NameEntry {
        transliteration: "At-Tawwab",
        arabic: "التَّوَّابُ",
        meaning: "The Acceptor of Repentance",
        description: "The One who grants repentance to whoever He willed among His creatures and accepts his repentance.",
    },
    NameEntry {
        transliteration: "Al-Muntaqim",
        arabic: "الْمُنْتَقِمُ",
        meaning: "The Avenger",
        description: "The One who victoriously prevails over His enemies and punishes them for their sins.",
    },
    NameEntry {
        transliteration: "Al-Afuww",
        arabic: "الْعَفُوُّ",
        meaning: "The Pardoner",
        description: "The One with wide forgiveness.",
    },
    NameEntry {
        transliteration: "Ar-Ra'uf",
        arabic: "الرَّءُوفُ",
        meaning: "The Compassionate",
        description: "The One with extreme Mercy. The Mercy of Allah is His will to endow upon whoever He willed among His creatures.",
    },
    NameEntry {
        transliteration: "Malik-ul-Mulk",
        arabic: "مَالِكُ الْمُلْكِ",
        meaning: "The Eternal Owner of Sovereignty",
        description: "The One who controls the Dominion and gives dominion to whoever He willed.",
    },
    NameEntry {
        transliteration: "Dhul-Jalali-wal-Ikram",
        arabic: "ذُو الْجَلاَلِ وَالإِكْرَامِ",
        meaning: "The Lord of Majesty and Bounty",
        description: "The One who deserves to be Exalted and not denied.",
    },
    NameEntry {
        transliteration: "Al-Muqsit",
        arabic: "الْمُقْسِطُ",
        meaning: "The Equitable",
        description: "The One who is Just in His judgment.",
    },
    NameEntry {
        transliteration: "Al-Jami",
        arabic: "الْجَامِعُ",
        meaning: "The Gatherer",
        description: "The One who gathers the creatures on a day that there is no doubt about, that is the Day of Judgment.",
    },
    NameEntry {
        transliteration: "Al-Ghaniyy",
        arabic: "الْغَنِيُّ",
        meaning: "The Self-Sufficient",
        description: "The One who does not need the creation.",
    },
    NameEntry {
        transliteration: "Al-Mughni",
        arabic: "الْمُغْنِي",
        meaning: "The Enricher",
        description: "The One who satisfies the necessities of the creatures.",
    },
    NameEntry {
        transliteration: "Al-Mani",
        arabic: "الْمَانِعُ",
        meaning: "The Preventer",
        description: "The Supporter who protects and gives victory to His pious believers.",
    },
    NameEntry {
        transliteration: "Ad-Darr",
        arabic: "الضَّارُ",
        meaning: "The Distresser",
        description: "The One who makes harm reach to whoever He willed and benefit to whoever He willed.",
    },
    NameEntry {
        transliteration: "An-Nafi",
        arabic: "النَّافِعُ",
        meaning: "The Propitious",
        description: "The One who makes harm reach to whoever He willed and benefit to whoever He willed.",
    },
    NameEntry {
        transliteration: "An-Nur",
        arabic: "النُّورُ",
        meaning: "The Light",
        description: "The One who guides.",
    },
    NameEntry {
        transliteration: "Al-Hadi",
        arabic: "الْهَادِي",
        meaning: "The Guide",
        description: "The One whom with His Guidance His believers were guided, and with His Guidance the living beings have been guided to what is beneficial for them and protected from what is harmful to them.",
    },
    NameEntry {
        transliteration: "Al-Badi",
        arabic: "الْبَدِيعُ",
        meaning: "The Incomparable",
        description: "The One who created the creation and formed it without any preceding example.",
    },
    NameEntry {
        transliteration: "Al-Baqi",
        arabic: "الْبَاقِي",
        meaning: "The Everlasting",
        description: "The One that the state of non-existence is impossible for Him.",
    },
    NameEntry {
        transliteration: "Al-Warith",
        arabic: "الْوَارِثُ",
        meaning: "The Supreme Inheritor",
        description: "The One whose Existence remains.",
    },
    NameEntry {
        transliteration: "Ar-Rashid",
        arabic: "الرَّشِيدُ",
        meaning: "The Guide to the Right Path",
        description: "The One who guides.",
    },
    NameEntry {
        transliteration: "As-Sabur",
        arabic: "الصَّبُورُ",
        meaning: "The Patient",
        description: "The One who does not quickly punish the sinners.",
    },
];

/// Names as reminder items: `name-<n>` ids, the transliteration as the
/// main line and the meaning as the secondary line.
pub static NAME_ITEMS: Lazy<Vec<ContentItem>> = Lazy::new(|| {
    NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let n = index + 1;
            ContentItem::new(
                format!("name-{n}"),
                ContentType::NamesOfAllah,
                name.arabic,
                name.transliteration,
                name.meaning,
                format!("Name #{n}"),
            )
            .with_description(name.description)
        })
        .collect()
});
