pub const SUBJECT: &[&str] = &[
    "angel", "autumn", "badger", "bamboo", "beach", "bear", "bird", "blossom", "breeze", "brook",
    "butterfly", "canopy", "canyon", "castle", "cave", "cloud", "coral", "crystal", "dawn", "deer",
    "desert", "dolphin", "dragon", "dream", "eagle", "echo", "ember", "falcon", "feather", "fire",
    "fish", "flame", "flower", "forest", "fox", "garden", "gate", "gazelle", "ghost", "glacier",
    "glade", "grove", "harbor", "hawk", "heart", "hero", "hill", "horizon", "island", "jungle",
    "lagoon", "lake", "leaf", "lion", "lotus", "mammoth", "meadow", "meteor", "mirror", "moon",
    "mountain", "night", "ocean", "orchid", "owl", "palm", "path", "penguin", "phoenix", "pirate",
    "pond", "rabbit", "rain", "rainbow", "rapids", "river", "rose", "sage", "sailor", "sea",
    "shadow", "shark", "sky", "snow", "sparrow", "spring", "star", "stone", "storm", "stream",
    "sun", "sunrise", "sunset", "swift", "tiger", "tree", "valley", "wave", "whale", "wind", "wolf",
    "wood",
];
