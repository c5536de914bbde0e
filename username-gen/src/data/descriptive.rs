pub const DESCRIPTIVE: &[&str] = &[
    "ancient", "autumn", "bold", "brave", "bright", "calm", "clever", "coastal", "cosmic",
    "crimson", "dancing", "daring", "desert", "divine", "double", "dreamy", "eager", "electric",
    "elegant", "ember", "fancy", "fierce", "flying", "forest", "frozen", "gentle", "golden",
    "happy", "hidden", "hollow", "humble", "icy", "infinite", "inner", "jade", "jolly", "joyful",
    "kind", "lazy", "little", "lonely", "lunar", "magic", "merry", "mighty", "misty", "morning",
    "mystic", "noble", "ocean", "peaceful", "proud", "purple", "quiet", "rapid", "royal", "ruby",
    "rustic", "sacred", "sandy", "secret", "shadow", "silent", "silver", "simple", "singing",
    "sleepy", "snowy", "solar", "spring", "storm", "summer", "sunny", "swift", "thunder", "tiger",
    "tiny", "triple", "twilight", "urban", "vintage", "wild", "winter", "wise", "wondering",
];
