//! Name and city generators.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Amir", "Ana", "Andre", "Astrid", "Bruno", "Carmen", "Chen", "Dana", "Diego",
    "Elena", "Emil", "Fatima", "Felix", "Grace", "Hana", "Hugo", "Ines", "Ivan", "Jonas",
    "Kaito", "Lena", "Liam", "Maja", "Marco", "Nadia", "Noah", "Olga", "Omar", "Priya",
    "Rosa", "Sam", "Sofia", "Tariq", "Vera", "Yuki",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Andersson", "Bauer", "Bennett", "Carter", "Chen", "Costa", "Dubois",
    "Fernandez", "Fischer", "Garcia", "Haddad", "Hansen", "Ibrahim", "Ivanova", "Jansen",
    "Kim", "Kowalski", "Larsen", "Lopez", "Mancini", "Martin", "Moreau", "Murphy", "Nakamura",
    "Novak", "Okafor", "Patel", "Popescu", "Rossi", "Santos", "Schmidt", "Silva", "Tanaka",
    "Weber", "Yilmaz",
];

const CITIES: &[&str] = &[
    "Aberdeen", "Bandung", "Bergen", "Brno", "Cartagena", "Cebu", "Chiang Mai", "Cork",
    "Curitiba", "Davao", "Fez", "Galway", "Ghent", "Graz", "Kaunas", "Kochi", "Leipzig",
    "Lille", "Lyon", "Malmo", "Mendoza", "Nagoya", "Oulu", "Porto", "Poznan", "Puebla",
    "Quito", "Rosario", "Salerno", "Sapporo", "Tampere", "Timisoara", "Turin", "Valencia",
    "Windhoek", "Zagreb",
];

pub fn first_name<R: Rng>(rng: &mut R) -> &'static str {
    FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())]
}

pub fn last_name<R: Rng>(rng: &mut R) -> &'static str {
    LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
}

pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", first_name(rng), last_name(rng))
}

pub fn city<R: Rng>(rng: &mut R) -> String {
    CITIES[rng.gen_range(0..CITIES.len())].to_string()
}
