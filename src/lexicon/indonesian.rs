//! Indonesian word lists

pub const TRANSITIONS: &[&str] = &[
    "akan tetapi",
    "akhirnya",
    "bahkan",
    "dengan demikian",
    "dengan kata lain",
    "di samping itu",
    "karena itu",
    "kedua",
    "kemudian",
    "kesimpulannya",
    "meskipun",
    "misalnya",
    "namun",
    "oleh karena itu",
    "pada akhirnya",
    "pertama",
    "sebagai contoh",
    "sebaliknya",
    "sehingga",
    "selain itu",
    "selanjutnya",
    "sementara itu",
    "terlebih lagi",
    "tetapi",
    "walaupun",
];

/// Passive verb prefixes (bound: a stem must follow)
pub const PASSIVE_MARKERS: &[&str] = &["di-", "ter-"];

/// Words starting with a passive prefix that are not passive verbs
pub const PASSIVE_EXCEPTIONS: &[&str] = &[
    "dia",
    "diam",
    "dian",
    "diet",
    "digital",
    "dilema",
    "dimana",
    "dinas",
    "dinding",
    "dingin",
    "dini",
    "diri",
    "dirinya",
    "disana",
    "disini",
    "diskon",
    "diskusi",
    "terakhir",
    "terbaik",
    "terbesar",
    "terdiri",
    "terhadap",
    "terima",
    "terlalu",
    "termasuk",
    "ternyata",
    "tersebut",
    "tertentu",
    "terus",
    "terutama",
];
