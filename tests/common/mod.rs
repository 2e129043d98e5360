// Shared fixtures for integration tests.
#![allow(dead_code)]

/// Ten clean sentences, 191 words.
pub const GARDEN_SENTENCES: [&str; 10] = [
    "Our neighborhood garden project started three years ago with a handful of volunteers and a borrowed patch of land near the river.",
    "Every spring the volunteers plant tomatoes, beans, squash and herbs in raised beds built from reclaimed wooden pallets.",
    "The garden now feeds dozens of families through a weekly harvest share that anyone in the neighborhood can join.",
    "Local schools send classes to learn about composting, soil health and how seeds grow into food.",
    "Rainwater barrels collect runoff from the community center roof and keep the beds watered through the dry summer months.",
    "Last autumn the volunteers added a small greenhouse so that seedlings can start much earlier in the cold season.",
    "A retired carpenter designed wooden benches and a shaded pavilion where visitors rest and share family recipes after harvest days.",
    "Funding comes from modest donations, a popular seed swap fundraiser and a generous grant from the city parks department.",
    "Volunteers hope to double the number of raised beds next year and open a second community garden across town.",
    "Anyone who wants to help can join the Saturday morning work sessions and bring gloves, water and plenty of curiosity.",
];

/// The ten garden sentences as one paragraph.
pub fn garden_text() -> String {
    GARDEN_SENTENCES.join(" ")
}

/// Three clean sentences, 38 words.
pub const SHORT_TEXT: &str = "The community garden opened this spring with twelve raised beds and a small tool shed. \
Volunteers water the plants every morning before work. \
Children from the local school visit on Fridays to learn about seeds, soil and worms.";

/// Seven sentences, 64 words, repeatedly insulting.
pub fn toxic_long_text() -> String {
    let mut text = "This idiot keeps posting the same nonsense in every thread. ".repeat(3);
    text.push_str(
        "Nobody asked for his opinion about the garden. \
         The moderators should remove these posts quickly. \
         Honestly the whole forum is tired of this idiot and his stupid comments. \
         Please ban him before the weekend.",
    );
    text
}
