use std::str::FromStr;

use log::debug;
use strum::{AsRefStr, Display};

use crate::{Difficulty, Exercise, Goal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub title: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub equipment: &'static [&'static str],
    pub exercises: &'static [Exercise],
    pub tips: &'static [&'static str],
}

#[derive(AsRefStr, Display, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlanID {
    #[strum(serialize = "strength")]
    Strength,
    #[strum(serialize = "cardio")]
    Cardio,
    #[strum(serialize = "beginner")]
    Beginner,
}

impl PlanID {
    /// Plans in the order their keywords are tested.
    pub const ALL: [PlanID; 3] = [PlanID::Strength, PlanID::Cardio, PlanID::Beginner];

    /// Returns the first plan whose keywords occur in the text, falling back to the strength plan.
    #[must_use]
    pub fn select(text: &str) -> PlanID {
        let text = text.to_lowercase();
        let plan_id = PlanID::ALL
            .into_iter()
            .find(|id| id.keywords().iter().any(|k| text.contains(k)))
            .unwrap_or(PlanID::Strength);
        debug!("selected {plan_id} plan");
        plan_id
    }

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            PlanID::Strength => &["strength", "strong", "muscle"],
            PlanID::Cardio => &["cardio", "endurance", "running"],
            PlanID::Beginner => &["beginner", "start", "new"],
        }
    }

    #[must_use]
    pub fn plan(self) -> &'static WorkoutPlan {
        match self {
            PlanID::Strength => &STRENGTH,
            PlanID::Cardio => &CARDIO,
            PlanID::Beginner => &BEGINNER,
        }
    }
}

impl FromStr for PlanID {
    type Err = PlanIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanID::ALL
            .into_iter()
            .find(|id| id.as_ref() == s)
            .ok_or_else(|| PlanIDError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanIDError {
    #[error("Unknown plan \"{0}\"")]
    Unknown(String),
}

#[must_use]
pub fn select_plan(goal: &Goal) -> &'static WorkoutPlan {
    PlanID::select(goal.as_ref()).plan()
}

static STRENGTH: WorkoutPlan = WorkoutPlan {
    title: "Dumbbell Strength Builder",
    duration: "20 minutes",
    difficulty: Difficulty::Intermediate,
    equipment: &["Dumbbells", "Exercise mat"],
    exercises: &[
        Exercise {
            name: "Goblet Squats",
            sets: "3",
            reps: "10-12",
            description: "Hold dumbbell at chest, squat down keeping back straight",
            difficulty: Difficulty::Intermediate,
            muscle_groups: &["Legs", "Glutes", "Core"],
        },
        Exercise {
            name: "Dumbbell Rows",
            sets: "3",
            reps: "10 each arm",
            description: "Support one hand on a bench, pull the dumbbell to your hip",
            difficulty: Difficulty::Intermediate,
            muscle_groups: &["Back", "Arms"],
        },
        Exercise {
            name: "Overhead Press",
            sets: "3",
            reps: "8-10",
            description: "Press dumbbells overhead, engage your core",
            difficulty: Difficulty::Intermediate,
            muscle_groups: &["Shoulders", "Arms", "Core"],
        },
        Exercise {
            name: "Push-ups",
            sets: "3",
            reps: "8-12",
            description: "Lower your chest to the floor, keep your body in a straight line",
            difficulty: Difficulty::Beginner,
            muscle_groups: &["Chest", "Arms", "Core"],
        },
    ],
    tips: &[
        "Rest 60-90 seconds between sets",
        "Choose a weight that makes the last two reps challenging",
        "Increase the weight once all sets feel easy",
    ],
};

static CARDIO: WorkoutPlan = WorkoutPlan {
    title: "Cardio Endurance Circuit",
    duration: "15 minutes",
    difficulty: Difficulty::Intermediate,
    equipment: &["None"],
    exercises: &[
        Exercise {
            name: "Jumping Jacks",
            sets: "3",
            reps: "45 seconds",
            description: "Jump feet apart while raising arms overhead, then return",
            difficulty: Difficulty::Beginner,
            muscle_groups: &["Full Body", "Cardio"],
        },
        Exercise {
            name: "High Knees",
            sets: "3",
            reps: "30 seconds",
            description: "Run in place driving your knees up to hip height",
            difficulty: Difficulty::Intermediate,
            muscle_groups: &["Legs", "Core", "Cardio"],
        },
        Exercise {
            name: "Mountain Climbers",
            sets: "3",
            reps: "30 seconds",
            description: "Plank position, alternate bringing knees to chest rapidly",
            difficulty: Difficulty::Intermediate,
            muscle_groups: &["Core", "Cardio"],
        },
    ],
    tips: &[
        "Rest 30 seconds between rounds",
        "Keep a pace at which you can still speak in short sentences",
        "Land softly to protect your joints",
    ],
};

static BEGINNER: WorkoutPlan = WorkoutPlan {
    title: "Beginner Full-Body Starter",
    duration: "25 minutes",
    difficulty: Difficulty::Beginner,
    equipment: &["Exercise mat"],
    exercises: &[
        Exercise {
            name: "Bodyweight Squats",
            sets: "2",
            reps: "10-12",
            description: "Squat down keeping knees behind toes, chest up",
            difficulty: Difficulty::Beginner,
            muscle_groups: &["Legs", "Glutes"],
        },
        Exercise {
            name: "Wall Push-ups",
            sets: "2",
            reps: "10",
            description: "Push away from a wall with your body straight",
            difficulty: Difficulty::Beginner,
            muscle_groups: &["Chest", "Arms"],
        },
        Exercise {
            name: "Glute Bridges",
            sets: "2",
            reps: "12",
            description: "Lie on your back, drive through your heels to lift your hips",
            difficulty: Difficulty::Beginner,
            muscle_groups: &["Glutes", "Core"],
        },
        Exercise {
            name: "Plank",
            sets: "2",
            reps: "20-30 seconds",
            description: "Hold plank position on forearms, keep body straight",
            difficulty: Difficulty::Beginner,
            muscle_groups: &["Core", "Shoulders"],
        },
    ],
    tips: &[
        "Focus on form before adding repetitions",
        "Rest as long as you need between sets",
        "Train two to three times per week",
    ],
};
