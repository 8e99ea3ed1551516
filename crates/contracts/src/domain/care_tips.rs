/// Совет по уходу
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CARE_TIPS: [CareTip; 5] = [
    CareTip {
        title: "Balanced Diet",
        description: "Provide a balanced diet appropriate for your dog's age, size, and activity level.",
    },
    CareTip {
        title: "Regular Exercise",
        description: "Ensure your dog gets regular exercise through walks, playtime, and activities.",
    },
    CareTip {
        title: "Veterinary Check-ups",
        description: "Schedule regular check-ups with a veterinarian for vaccinations and health screenings.",
    },
    CareTip {
        title: "Grooming",
        description: "Groom your dog regularly, including brushing their coat and teeth.",
    },
    CareTip {
        title: "Mental Stimulation",
        description: "Offer mental stimulation through training, puzzles, and interactive toys.",
    },
];
