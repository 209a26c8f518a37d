//! The hallowed-object table
//!
//! One entry per (month, day) pair of a leap-covering year, February 29
//! included. See https://github.com/tobozo/SaintObjetBot for data credits.

use crate::domain::error::NoEntryError;

use super::day_entry::{DayEntry, Gender};

/// Lookup table from a 1-based (month, day) pair to the day's entry.
///
/// Constructed explicitly and handed to the formatter; the data itself is
/// static and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct CalendarTable {
    months: [&'static [DayEntry]; 12],
}

impl CalendarTable {
    /// Create the table over the full year of data
    pub fn new() -> Self {
        Self {
            months: [
                &JANUARY, &FEBRUARY, &MARCH, &APRIL, &MAY, &JUNE, &JULY, &AUGUST, &SEPTEMBER,
                &OCTOBER, &NOVEMBER, &DECEMBER,
            ],
        }
    }

    /// Look up the entry for a 1-based (month, day) pair.
    pub fn entry(&self, month: u32, day: u32) -> Result<&'static DayEntry, NoEntryError> {
        self.months
            .get(month.wrapping_sub(1) as usize)
            .and_then(|days| days.get(day.wrapping_sub(1) as usize))
            .ok_or(NoEntryError { month, day })
    }

    /// Iterate over every (month, day, entry) triple in the table.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &'static DayEntry)> + '_ {
        self.months.iter().enumerate().flat_map(|(month, days)| {
            days.iter()
                .enumerate()
                .map(move |(day, entry)| (month as u32 + 1, day as u32 + 1, entry))
        })
    }
}

impl Default for CalendarTable {
    fn default() -> Self {
        Self::new()
    }
}

const fn day(singular: &'static str, plural: &'static str, gender: Gender) -> DayEntry {
    DayEntry {
        singular,
        plural,
        gender,
    }
}

static JANUARY: [DayEntry; 31] = [
    day("veisalgie", "veisalgies", Gender::Feminine),
    day("ankylostome", "ankylostomes", Gender::Masculine),
    day("apex", "apexes", Gender::Masculine),
    day("arlequin", "arlequins", Gender::Masculine),
    day("bengali", "bengalis", Gender::Masculine),
    day("bouquetin", "bouquetins", Gender::Masculine),
    day("cancrelat", "cancrelats", Gender::Masculine),
    day("cerf-volant", "cerfs-volants", Gender::Masculine),
    day("colibri", "colibris", Gender::Masculine),
    day("dromadaire", "dromadaires", Gender::Masculine),
    day("embrouillamini", "embrouillaminis", Gender::Masculine),
    day("fauconneau", "fauconeaux", Gender::Masculine),
    day("gambette", "gambettes", Gender::Feminine),
    day("hérisson", " hérissons", Gender::Masculine),
    day("javelot", "javelots", Gender::Masculine),
    day("kangourou", "kangourous", Gender::Masculine),
    day("lampion", "lampions", Gender::Masculine),
    day("manuscrit", "manuscrits", Gender::Masculine),
    day("quignon", "quignons", Gender::Masculine),
    day("tablier", "tabliers", Gender::Masculine),
    day("zorglub", "zorglubs", Gender::Masculine),
    day("pataquès", "pataquès", Gender::Masculine),
    day("bobèche", "bobèches", Gender::Feminine),
    day("zézaiement", "zézaiements", Gender::Masculine),
    day("flibustier", "flibustiers", Gender::Masculine),
    day("mirliton", "mirlitons", Gender::Masculine),
    day("craspouille", "craspouilles", Gender::Feminine),
    day("zigouigoui", "zigouigouis", Gender::Masculine),
    day("faribole", "fariboles", Gender::Feminine),
    day("pantouflette", "pantouflettes", Gender::Feminine),
    day("zinzin", "zinzins", Gender::Masculine),
];

static FEBRUARY: [DayEntry; 29] = [
    day("bibelot", "bibelots", Gender::Masculine),
    day("ukulélé", "ukulélés", Gender::Masculine),
    day("grigris", "grigris", Gender::Masculine),
    day("crinoline", "crinolines", Gender::Feminine),
    day("turlutaine", "turlutaines", Gender::Feminine),
    day("boudeuse", "boudeuses", Gender::Feminine),
    day("tralala", "tralalas", Gender::Masculine),
    day("carambolage", "carambolages", Gender::Masculine),
    day("frimousse", "frimousses", Gender::Feminine),
    day("catafalque", "catafalques", Gender::Masculine),
    day("chicane", "chicanes", Gender::Feminine),
    day("barbichette", "barbichettes", Gender::Feminine),
    day("croquignole", "croquignoles", Gender::Masculine),
    day("rouleau de sopalin", "rouleaux de sopalin", Gender::Masculine),
    day("clavicule", "clavicules", Gender::Feminine),
    day("bambinette", "bambinettes", Gender::Feminine),
    day("sporange", "sporanges", Gender::Masculine),
    day("fléole", "fléoles", Gender::Feminine),
    day("goubelin", "goubelins", Gender::Masculine),
    day("bélin", "bélins", Gender::Masculine),
    day("grébiche", "grébiches", Gender::Feminine),
    day("pipistrelle", "pipistrelles", Gender::Feminine),
    day("badine", "badines", Gender::Feminine),
    day("guttule", "guttules", Gender::Feminine),
    day("sautoir", "sautoirs", Gender::Masculine),
    day("tourniquet", "tourniquets", Gender::Masculine),
    day("grenouillère", "grenouillères", Gender::Feminine),
    day("torsade", "torsades", Gender::Feminine),
    day("calicot", "calicots", Gender::Masculine),
];

static MARCH: [DayEntry; 31] = [
    day("gousset", "goussets", Gender::Masculine),
    day("tournebille", "tournebilles", Gender::Feminine),
    day("gibelotte", "gibelottes", Gender::Feminine),
    day("cabestan", "cabestans", Gender::Masculine),
    day("mélopée", "mélodées", Gender::Feminine),
    day("galurin", "galurins", Gender::Masculine),
    day("joug", "jougs", Gender::Masculine),
    day("cabriole", "cabrioles", Gender::Feminine),
    day("attache parisienne", "attaches parisiennes", Gender::Feminine),
    day("bac à charbon", "bacs à charbon", Gender::Masculine),
    day("béquille", "béquilles", Gender::Feminine),
    day("boussole", "boussoles", Gender::Feminine),
    day("caméra argentique", "caméras argentiques", Gender::Feminine),
    day("canne", "cannes", Gender::Feminine),
    day("cloche", "cloches", Gender::Feminine),
    day("clou", "clous", Gender::Masculine),
    day("coton-tige", "cotons-tiges", Gender::Masculine),
    day("disque vinyle", "disques vinyles", Gender::Masculine),
    day("encrier", "encriers", Gender::Masculine),
    day("fer à repasser", "fers à repasser", Gender::Masculine),
    day("fusil à pompe", "fusils à pompe", Gender::Masculine),
    day("gourde", "gourdes", Gender::Feminine),
    day("imprimante à marguerite", "imprimantes à marguerite", Gender::Feminine),
    day("tendu-de-majeur", "doigts d'honneur", Gender::Masculine),
    day("machine à écrire", "machines à écrire", Gender::Feminine),
    day("poignée de porte", "poignées de porte", Gender::Feminine),
    day("savon de marseille", "savons de marseille", Gender::Masculine),
    day("stylo à plume", "stylos à plume", Gender::Masculine),
    day("téléviseur cathodique", "téléviseurs cathodiques", Gender::Masculine),
    day("urne funéraire", "urnes funéraires", Gender::Feminine),
    day("balai", "balais", Gender::Masculine),
];

static APRIL: [DayEntry; 30] = [
    day("microplastique", "microplastiques", Gender::Masculine),
    day("bougie", "bougies", Gender::Feminine),
    day("cabine téléphonique", "cabines téléphoniques", Gender::Feminine),
    day("canapé", "canapés", Gender::Masculine),
    day("carte postale", "cartes postales", Gender::Feminine),
    day("ceinture", "ceintures", Gender::Feminine),
    day("engrenage", "engrenages", Gender::Masculine),
    day("escalier", "escaliers", Gender::Masculine),
    day("monogramme", "monogrammes", Gender::Masculine),
    day("acanthe", "acanthes", Gender::Feminine),
    day("humus", "humus", Gender::Masculine),
    day("entroque", "entroque", Gender::Feminine),
    day("fourneau", "fourneaux", Gender::Masculine),
    day("ampoule multiprise et rallonge", "ampoules multiprises et rallonges", Gender::Feminine),
    day("alésoir à cliquet", "Alésoirs à cliquets", Gender::Masculine),
    day("clapier", "clapiers", Gender::Masculine),
    day("taloche", "taloches", Gender::Feminine),
    day("occiput", "occiputs", Gender::Masculine),
    day("diodon", "diodons", Gender::Masculine),
    day("tricorne", "tricornes", Gender::Masculine),
    day("spume", "spumes", Gender::Feminine),
    day("manchon", "manchons", Gender::Masculine),
    day("limaçon", "limaçons", Gender::Masculine),
    day("levraut", "levrauts", Gender::Masculine),
    day("gymkhana", "gymkhanas", Gender::Masculine),
    day("dosimètre", "dosimètres", Gender::Masculine),
    day("queue-de-pie", "queues-de-pie", Gender::Feminine),
    day("clé à pipe débouchée", "Clés à pipe débouchées", Gender::Feminine),
    day("perruque", "perruques", Gender::Feminine),
    day("traille", "trailles", Gender::Feminine),
];

static MAY: [DayEntry; 31] = [
    day("tripalium", "tripaliums", Gender::Masculine),
    day("pastille", "pastilles", Gender::Feminine),
    day("francisque", "francisques", Gender::Feminine),
    day("pirouette", "pirouettes", Gender::Feminine),
    day("marmouset", "marmousets", Gender::Masculine),
    day("pédicelle", "pédicelles", Gender::Masculine),
    day("hypsomètre", "hypsomètres", Gender::Masculine),
    day("lambrequin", "lambrequins", Gender::Masculine),
    day("cribellum", "cribellums", Gender::Masculine),
    day("hélicoïde", "hélicoïdes", Gender::Feminine),
    day("quenouille", "quenouilles", Gender::Feminine),
    day("zythum", "zytha", Gender::Masculine),
    day("sarbacane", "sarbacanes", Gender::Feminine),
    day("turion", "turions", Gender::Masculine),
    day("blaireau", "blaireaux", Gender::Masculine),
    day("sémaphore", "sémaphores", Gender::Feminine),
    day("crispatule", "crispatules", Gender::Feminine),
    day("zist", "zists", Gender::Masculine),
    day("chiquenaude", "chiquenaudes", Gender::Feminine),
    day("sagouin", "sagouins", Gender::Masculine),
    day("borborygme", "borborygmes", Gender::Masculine),
    day("zéphyr", "zéphyrs", Gender::Masculine),
    day("schnock", "schnocks", Gender::Masculine),
    day("pendeloque", "pendeloques", Gender::Feminine),
    day("falbala", "falbalas", Gender::Masculine),
    day("nycthémère", "nycthémères", Gender::Masculine),
    day("houppier", "houppiers", Gender::Masculine),
    day("suaire", "suaires", Gender::Masculine),
    day("jable", "jables", Gender::Masculine),
    day("goulot", "goulots", Gender::Masculine),
    day("bourdalou", "bourdalous", Gender::Masculine),
];

static JUNE: [DayEntry; 30] = [
    day("zibeline", "zibelines", Gender::Feminine),
    day("turpitude", "turpitudes", Gender::Feminine),
    day("carafon", "carafons", Gender::Masculine),
    day("roubignole", "roubignoles", Gender::Feminine),
    day("cantharide", "cantharides", Gender::Feminine),
    day("pédoncule", "pédoncules", Gender::Masculine),
    day("élytre", "élytres", Gender::Masculine),
    day("cressonnière", "cressonnières", Gender::Feminine),
    day("araignée", "araignées", Gender::Feminine),
    day("sarment", "sarments", Gender::Masculine),
    day("argousin", "argousins", Gender::Masculine),
    day("poudingue", "poudingues", Gender::Masculine),
    day("pandiculation", "pandiculations", Gender::Feminine),
    day("gaudriole", "gaudrioles", Gender::Feminine),
    day("chenapan", "chenapans", Gender::Masculine),
    day("carabistouille", "carabistouilles", Gender::Feminine),
    day("baliverne", "balivernes", Gender::Feminine),
    day("histrion", "histrions", Gender::Masculine),
    day("babiole", "babioles", Gender::Feminine),
    day("pétouille", "pétouilles", Gender::Feminine),
    day("baragouin", "baragouins", Gender::Masculine),
    day("patatras", "patatras", Gender::Masculine),
    day("alambic", "alambics", Gender::Masculine),
    day("billevesée", "billevesées", Gender::Feminine),
    day("rigolboche", "rigolboches", Gender::Feminine),
    day("turlupin", "turlupins", Gender::Masculine),
    day("turlurette", "turlurettes", Gender::Feminine),
    day("guignol", "guignols", Gender::Masculine),
    day("bille-molle", "billes-molles", Gender::Feminine),
    day("brimborion", "brimborions", Gender::Masculine),
];

static JULY: [DayEntry; 31] = [
    day("mirliflore", "mirliflores", Gender::Feminine),
    day("clapiotte", "clapiottes", Gender::Feminine),
    day("gaffophone", "gaffophones", Gender::Masculine),
    day("légumineur", "légumineurs", Gender::Masculine),
    day("micro-onduleur", "micro-onduleurs", Gender::Masculine),
    day("frite-magique", "frites-magiques", Gender::Feminine),
    day("extracteur du potentiel de point zéro", "extracteurs du potentiel de point zéro", Gender::Masculine),
    day("réveil-tartine", "réveils-tartines", Gender::Masculine),
    day("horloge-moussante", "horloges-moussantes", Gender::Feminine),
    day("canapélicoptère", "canapélicoptères", Gender::Masculine),
    day("éponge-lumineuse", "éponges-lumineuses", Gender::Feminine),
    day("spatulon", "spatulons", Gender::Masculine),
    day("vaissellier-volant", "vaisselliers-volants", Gender::Masculine),
    day("boîte-à-bêtises", "boîtes-à-bêtises", Gender::Feminine),
    day("télé-poubelle", "télé-poubelles", Gender::Feminine),
    day("baignoire-parlante", "baignoires-parlantes", Gender::Feminine),
    day("armoire-à-glissade", "armoires-à-glissade", Gender::Feminine),
    day("pierre manale", "pierres manales", Gender::Feminine),
    day("grille-pain de l'espace", "grilles-pains de l'espace", Gender::Masculine),
    day("robot-raccommodeur", "robots-raccommodeurs", Gender::Masculine),
    day("fourchette-à-comptine", "fourchettes-à-comptines", Gender::Feminine),
    day("pantoufle-réactive", "pantoufles-réactives", Gender::Feminine),
    day("coussin-péteur", "coussins-péteurs", Gender::Masculine),
    day("télé-orbitale", "télés-orbitales", Gender::Feminine),
    day("brosse-à-dent sonique", "brosses-à-dent soniques", Gender::Feminine),
    day("couette-intelligente", "couettes-intelligentes", Gender::Feminine),
    day("pyjama-à-histoires", "pyjamas-à-histoires", Gender::Masculine),
    day("bol-à-mystère", "bols-à-mystère", Gender::Masculine),
    day("tabouret-téléphone", "tabourets-téléphone", Gender::Masculine),
    day("miroir-savant", "miroirs-savants", Gender::Masculine),
    day("tapis-volant d'intérieur", "tapis-volants d'intérieur", Gender::Masculine),
];

static AUGUST: [DayEntry; 31] = [
    day("oreiller-à-musique", "oreillers-à-musique", Gender::Masculine),
    day("papier-peint interactif", "papiers-peints interactifs", Gender::Masculine),
    day("xylophone", "xylophones", Gender::Masculine),
    day("guilloché", "guillochés", Gender::Masculine),
    day("djembé", "djembés", Gender::Masculine),
    day("caipirinha", "caipirinhas", Gender::Feminine),
    day("tzatziki", "tzatzikis", Gender::Neutral),
    day("karaoke", "karaokes", Gender::Masculine),
    day("kantele", "kanteles", Gender::Feminine),
    day("haiku", "haikus", Gender::Masculine),
    day("colchique", "colchiques", Gender::Feminine),
    day("molinillo", "molinillos", Gender::Masculine),
    day("quokka", "quokkas", Gender::Feminine),
    day("duduk", "duduks", Gender::Masculine),
    day("balalaïka", "balalaïkas", Gender::Feminine),
    day("fajitas", "fajitas", Gender::Feminine),
    day("bobineau", "bobineaux", Gender::Masculine),
    day("fjord", "fjords", Gender::Masculine),
    day("tsampa", "tsampas", Gender::Feminine),
    day("qipao", "qipaos", Gender::Feminine),
    day("boomerang", "boomerangs", Gender::Masculine),
    day("cachou", "cachous", Gender::Masculine),
    day("sac à dos", "sacs à dos", Gender::Masculine),
    day("brosse à dents", "brosses à dents", Gender::Feminine),
    day("lampe de bureau", "lampes de bureau", Gender::Feminine),
    day("tapis de souris", "tapis de souris", Gender::Masculine),
    day("pot de fleurs", "pots de fleurs", Gender::Masculine),
    day("brosse à cheveux", "brosses à cheveux", Gender::Feminine),
    day("boucle d'oreille", "boucles d'oreilles", Gender::Feminine),
    day("manette de jeu", "manettes de jeu", Gender::Feminine),
    day("tapis de yoga", "tapis de yoga", Gender::Masculine),
];

static SEPTEMBER: [DayEntry; 30] = [
    day("corde à sauter", "cordes à sauter", Gender::Feminine),
    day("haltère", "haltères", Gender::Masculine),
    day("trottinette", "trottinettes", Gender::Feminine),
    day("sac de couchage", "sacs de couchage", Gender::Masculine),
    day("réchaud de camping", "réchauds de camping", Gender::Masculine),
    day("chaussure de randonnée", "chaussures de randonnée", Gender::Feminine),
    day("taille-crayon", "taille-crayons", Gender::Masculine),
    day("agrafeuse", "agrafeuses", Gender::Feminine),
    day("aspirateur", "aspirateurs", Gender::Masculine),
    day("lave-linge", "lave-linges", Gender::Masculine),
    day("sèche-linge", "sèche-linges", Gender::Masculine),
    day("machine à coudre", "machines à coudre", Gender::Feminine),
    day("serpillère", "serpillères", Gender::Feminine),
    day("tronçonneuse", "tronçonneuses", Gender::Feminine),
    day("débroussailleuse", "débroussailleuses", Gender::Feminine),
    day("motoculteur", "motoculteurs", Gender::Masculine),
    day("râteau", "râteaux", Gender::Masculine),
    day("clé à molette", "clés à molette", Gender::Feminine),
    day("scie circulaire", "scies circulaires", Gender::Feminine),
    day("détecteur de fumée", "détecteurs de fumée", Gender::Masculine),
    day("caméra de surveillance", "caméras de surveillance", Gender::Feminine),
    day("moustiquaire", "moustiquaires", Gender::Feminine),
    day("brise-vent", "brise-vent", Gender::Masculine),
    day("balcon", "balcons", Gender::Masculine),
    day("jardinière", "jardinières", Gender::Feminine),
    day("buisson", "buissons", Gender::Masculine),
    day("haie", "haies", Gender::Feminine),
    day("système d'irrigation", "systèmes d'irrigation", Gender::Masculine),
    day("thermomètre", "thermomètres", Gender::Masculine),
    day("hygromètre", "hygromètres", Gender::Masculine),
];

static OCTOBER: [DayEntry; 31] = [
    day("luxmètre", "luxmètres", Gender::Masculine),
    day("anémomètre", "anémomètres", Gender::Masculine),
    day("pluviomètre", "pluviomètres", Gender::Masculine),
    day("baromètre", "baromètres", Gender::Masculine),
    day("chronomètre", "chronomètres", Gender::Masculine),
    day("microscope", "microscopes", Gender::Masculine),
    day("télescope", "télescopes", Gender::Masculine),
    day("spectroscope", "spectroscopes", Gender::Masculine),
    day("sac à bière", "sacs à bière", Gender::Masculine),
    day("ohmmètre", "ohmmètres", Gender::Masculine),
    day("ampermètre", "ampermètres", Gender::Masculine),
    day("voltmètre", "voltmètres", Gender::Masculine),
    day("oscilloscope", "oscilloscopes", Gender::Masculine),
    day("fréquencemètre", "fréquencemètres", Gender::Masculine),
    day("analyseur de spectre", "analyseurs de spectre", Gender::Masculine),
    day("circuit imprimé", "circuits imprimés", Gender::Masculine),
    day("disjoncteur", "disjoncteurs", Gender::Masculine),
    day("machine-à-faire-des-trous-dans-les-spaghetti", "machines-à-faire-des-trous-dans-les-spaghetti", Gender::Feminine),
    day("morceau de bois", "morceaux de bois", Gender::Masculine),
    day("pot de colle", "pots de colle", Gender::Masculine),
    day("paquet cadeau", "paquets cadeaux", Gender::Masculine),
    day("cacatoès", "cacatoès", Gender::Feminine),
    day("harmonica", "harmonicas", Gender::Masculine),
    day("bigoudi", "bigoudis", Gender::Masculine),
    day("dent de lait", "dents de lait", Gender::Feminine),
    day("bonhomme de neige", "bonhommes de neige", Gender::Masculine),
    day("marteau picoreur", "marteaux picoreurs", Gender::Masculine),
    day("bande magnétique", "bandes magnétiques", Gender::Feminine),
    day("punaise de lit", "punaises de lit", Gender::Feminine),
    day("carte de voeux", "cartes de voeux", Gender::Feminine),
    day("moins que rien", "moins que rien", Gender::Masculine),
];

static NOVEMBER: [DayEntry; 30] = [
    day("tour eiffel", "tours eiffel", Gender::Feminine),
    day("symptôme", "symptômes", Gender::Masculine),
    day("mamanite", "amanites", Gender::Feminine),
    day("cornichon", "cornichons", Gender::Masculine),
    day("zinzolin", "zinzolins", Gender::Masculine),
    day("jouet à bascule", "jouets à bascule", Gender::Masculine),
    day("bloc-notes", "blocs-notes", Gender::Masculine),
    day("routoir", "routoirs", Gender::Masculine),
    day("guenille", "guenilles", Gender::Feminine),
    day("lunette de soleil", "lunettes de soleil", Gender::Feminine),
    day("octavin", "octavins", Gender::Masculine),
    day("toque à trois cornes", "toques à trois cornes", Gender::Feminine),
    day("navire-hôpital", "navires-hôpitaux", Gender::Masculine),
    day("sesquiplan", "sesquiplans", Gender::Masculine),
    day("baldaquin", "baldaquins", Gender::Masculine),
    day("anémoscope", "anémoscopes", Gender::Masculine),
    day("clavicythérium", "clavicythériums", Gender::Masculine),
    day("certificat de conformité", "certificats de conformité", Gender::Masculine),
    day("bonnet de nuit", " bonnets de nuit", Gender::Masculine),
    day("atmomètre", "atmomètres", Gender::Masculine),
    day("pnéomètre", "pnéomètres", Gender::Masculine),
    day("marie-salope", "marie-salopes", Gender::Feminine),
    day("lettre de crédit", "lettres de crédit", Gender::Feminine),
    day("cithare", "cithares", Gender::Feminine),
    day("tramezzino", "tramezzinos", Gender::Masculine),
    day("ichcahuipilli", "ichcahuipillis", Gender::Feminine),
    day("journal intime", "journaux intimes", Gender::Masculine),
    day("harpe celtique", "harpes celtiques", Gender::Feminine),
    day("nœud d’agui", "nœuds d’agui", Gender::Masculine),
    day("cabotière", "cabotières", Gender::Feminine),
];

static DECEMBER: [DayEntry; 31] = [
    day("pique-œuf", "pique-œufs", Gender::Masculine),
    day("revue de contrat", "revues de contrats", Gender::Feminine),
    day("grande surface", "grandes surfaces", Gender::Feminine),
    day("manteau de cheminée", "manteaux de cheminées", Gender::Masculine),
    day("charentaise", "charentaises", Gender::Feminine),
    day("chasse-goupille", "chasse-goupilles", Gender::Masculine),
    day("chaussure à orteils", "chaussures à orteils", Gender::Feminine),
    day("giroflée à cinq pétales", "giroflées a cinq pétales", Gender::Feminine),
    day("salade de phalanges", "salades de phalanges", Gender::Feminine),
    day("rogntudju", "rogntudju", Gender::Masculine),
    day("lixiviateuse", "lixiviateuses", Gender::Feminine),
    day("chaise berçante", "chaises berçantes", Gender::Feminine),
    day("chebec", "chebec", Gender::Masculine),
    day("boulevard circulaire", "boulevards circulaires", Gender::Masculine),
    day("bande cyclable", "bandes cyclables", Gender::Feminine),
    day("coupe-boulons", "coupe-boulons", Gender::Masculine),
    day("clé à pipe", "clés à pipes", Gender::Feminine),
    day("ensacheuse", "ensacheuses", Gender::Feminine),
    day("fulguromètre", "fulguromètre", Gender::Masculine),
    day("diptyque", "diptyques", Gender::Masculine),
    day("cucurbitacée", "cucurbitacées", Gender::Masculine),
    day("glassophone", "glassophones", Gender::Masculine),
    day("métaphore", "métaphores", Gender::Feminine),
    day("pentécontère", "pentécontères", Gender::Masculine),
    day("prépuce", "prépuces", Gender::Masculine),
    day("cumulus bourgeonnant", "cumulus bourgeonnants", Gender::Masculine),
    day("pyréolophore", "pyréolophores", Gender::Masculine),
    day("soubassophone", "soubassophones", Gender::Masculine),
    day("béret basque", "bérets basques", Gender::Masculine),
    day("vocifération sportive", "vociférations sportives", Gender::Masculine),
    day("armoire à glace", "armoires à glace", Gender::Feminine),
];

#[cfg(test)]
mod tests {
    use super::*;

    const MONTH_LENGTHS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    #[test]
    fn covers_every_date_of_a_leap_year() {
        let table = CalendarTable::new();
        for (month, len) in MONTH_LENGTHS.iter().enumerate() {
            for day in 1..=*len {
                assert!(
                    table.entry(month as u32 + 1, day).is_ok(),
                    "missing entry for ({}, {})",
                    month + 1,
                    day
                );
            }
        }
        assert_eq!(table.iter().count(), 366);
    }

    #[test]
    fn every_entry_has_nouns_and_gender() {
        let table = CalendarTable::new();
        for (month, day, entry) in table.iter() {
            assert!(!entry.singular.is_empty(), "empty singular at ({}, {})", month, day);
            assert!(!entry.plural.is_empty(), "empty plural at ({}, {})", month, day);
            assert!(matches!(
                entry.gender,
                Gender::Masculine | Gender::Feminine | Gender::Neutral
            ));
        }
    }

    #[test]
    fn known_entries_resolve() {
        let table = CalendarTable::new();

        let new_year = table.entry(1, 1).unwrap();
        assert_eq!(new_year.singular, "veisalgie");
        assert_eq!(new_year.plural, "veisalgies");
        assert_eq!(new_year.gender, Gender::Feminine);

        let leap_day = table.entry(2, 29).unwrap();
        assert_eq!(leap_day.singular, "calicot");

        // The lone neutral entry in the table
        let tzatziki = table.entry(8, 7).unwrap();
        assert_eq!(tzatziki.gender, Gender::Neutral);
    }

    #[test]
    fn invalid_pairs_are_reported() {
        let table = CalendarTable::new();
        for (month, day) in [(2, 30), (4, 31), (13, 1), (0, 1), (1, 0), (1, 32)] {
            let err = table.entry(month, day).unwrap_err();
            assert_eq!((err.month, err.day), (month, day));
        }
    }
}
