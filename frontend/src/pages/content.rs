// Static copy for the landing page sections.

pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub struct Place {
    pub name: &'static str,
    pub img: &'static str,
    pub activities: &'static str,
    pub must_visit: &'static str,
    pub budget: &'static str,
}

pub struct ItineraryCategory {
    pub kind: &'static str,
    pub places: &'static [Place],
}

pub struct AboutCard {
    pub img: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const HOW_IT_WORKS: &[Step] = &[
    Step {
        step: "1️⃣",
        title: "Enter Preferences",
        text: "Tell us your destination, budget, and interests.",
    },
    Step {
        step: "2️⃣",
        title: "AI Generates Plan",
        text: "Our smart AI builds a personalized trip itinerary.",
    },
    Step {
        step: "3️⃣",
        title: "Enjoy Your Journey",
        text: "Get recommendations, routes & activities instantly!",
    },
];

pub const ITINERARIES: &[ItineraryCategory] = &[
    ItineraryCategory {
        kind: "National Trips",
        places: &[
            Place {
                name: "Jaipur, Rajasthan",
                img: "/jaipur.jpg",
                activities: "🏰 Explore Amber Fort and City Palace, enjoy a traditional Rajasthani dinner, and shop at vibrant local bazaars.",
                must_visit: "✨ Hawa Mahal, Jal Mahal, and the colorful streets of Johari Bazaar.",
                budget: "💰 Avg. Budget: ₹15,000 – ₹25,000 for 4 days",
            },
            Place {
                name: "Kerala, Backwaters",
                img: "/kerala.jpg",
                activities: "🛶 Relax on a houseboat ride, watch Kathakali performances, and taste authentic Kerala cuisine.",
                must_visit: "✨ Alleppey backwaters, Munnar tea plantations, and Kovalam beaches.",
                budget: "💰 Avg. Budget: ₹18,000 – ₹30,000 for 5 days",
            },
        ],
    },
    ItineraryCategory {
        kind: "International Trips",
        places: &[
            Place {
                name: "Paris, France",
                img: "/paris.jpg",
                activities: "🗼 Visit the Eiffel Tower, explore the Louvre Museum, stroll through romantic streets, and enjoy French pastries.",
                must_visit: "✨ Montmartre, Seine River cruises, and Champs-Élysées shopping.",
                budget: "💰 Avg. Budget: ₹85,000 – ₹1,20,000 for 6 days",
            },
            Place {
                name: "Bali, Indonesia",
                img: "/bali.jpg",
                activities: "🏝️ Relax on beaches, surf waves, visit temples, hike volcanoes, and indulge in Balinese spa therapies.",
                must_visit: "✨ Ubud Monkey Forest, Tanah Lot Temple, and Nusa Penida island.",
                budget: "💰 Avg. Budget: ₹60,000 – ₹90,000 for 5 days",
            },
        ],
    },
];

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        img: "/about2.jpg",
        title: "Tell us your dream, we’ll shape the journey",
        text: "Add your destination, budget, and interests, and let our AI craft a customized travel plan just for you. GoGlobe adapts to all preferences.",
    },
    AboutCard {
        img: "/about1.jpg",
        title: "Helps You Travel smart, not expensive",
        text: "Our AI finds the best routes, stays, and activities within your budget. Making your beautiful trips better, stress-free and cost-effective .",
    },
    AboutCard {
        img: "/about3.jpg",
        title: "From ideas to itineraries, all in one place",
        text: "Get destinations, trip plans, recommendations, and must-do activities in seconds with your very own personal AI travel buddy.",
    },
];

/// Timeline cards alternate sides, starting on the left.
pub fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "timeline-left"
    } else {
        "timeline-right"
    }
}

pub fn footer_text(year: i32) -> String {
    format!("© {} My Trip Planner Hackathon Project 🚀", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_alternates_sides() {
        let sides: Vec<&str> = (0..HOW_IT_WORKS.len()).map(timeline_side).collect();
        assert_eq!(sides, vec!["timeline-left", "timeline-right", "timeline-left"]);
    }

    #[test]
    fn itineraries_cover_national_and_international() {
        let kinds: Vec<&str> = ITINERARIES.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec!["National Trips", "International Trips"]);
        assert!(ITINERARIES.iter().all(|c| c.places.len() == 2));
    }

    #[test]
    fn footer_includes_year() {
        assert_eq!(footer_text(2026), "© 2026 My Trip Planner Hackathon Project 🚀");
    }
}
