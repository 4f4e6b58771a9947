//! Positional lookup tables for presentation fields.
//!
//! Item `i` of a batch always gets entry `i mod len`, so values repeat once a batch is
//! longer than the table.

/// Captions assigned to live posts by position.
pub const CAPTIONS: [&str; 10] = [
    "Lost in the beauty of nature 🌿 Sometimes you need to disconnect to reconnect.",
    "Golden hour magic ✨ Perfect lighting makes everything beautiful.",
    "Coffee and contemplation ☕ The best way to start any morning.",
    "Urban adventures 🏙️ Every street has its own story to tell.",
    "Sunset vibes 🌅 Nature's daily masterpiece never disappoints.",
    "Foodie paradise found 🍽️ When presentation matches the incredible taste.",
    "Travel dreams realized ✈️ This place exceeded all my expectations.",
    "Creative mood today 🎨 Art is how we decorate space and time.",
    "Weekend wellness 💆‍♀️ Self-care isn't selfish, it's essential.",
    "Making memories 📸 Life is about collecting moments, not things.",
];

/// Usernames assigned to live post authors by position.
pub const AESTHETIC_USERNAMES: [&str; 10] = [
    "wanderlust_soul",
    "coffee_vibes",
    "sunset_chaser",
    "ocean_dreams",
    "city_lights",
    "nature_lover",
    "art_enthusiast",
    "foodie_adventures",
    "travel_diaries",
    "creative_mind",
];

/// Caption for the item at `index`.
pub fn caption_at(index: usize) -> &'static str {
    CAPTIONS[index % CAPTIONS.len()]
}

/// Author username for the item at `index`.
pub fn username_at(index: usize) -> &'static str {
    AESTHETIC_USERNAMES[index % AESTHETIC_USERNAMES.len()]
}
