use crate::{Difficulty, Exercise};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub exercises: &'static [Exercise],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Icon {
    Dumbbell,
    Target,
    Heart,
}

#[must_use]
pub fn categories() -> &'static [ExerciseCategory] {
    &CATEGORIES
}

#[must_use]
pub fn general_tips() -> &'static [&'static str] {
    &GENERAL_TIPS
}

static CATEGORIES: [ExerciseCategory; 3] = [
    ExerciseCategory {
        title: "Upper Body",
        description: "Build strength in your arms, chest, and back",
        icon: Icon::Dumbbell,
        exercises: &[
            Exercise {
                name: "Push-ups",
                sets: "3",
                reps: "8-12",
                description: "Classic chest and arm builder. Start on knees if needed.",
                difficulty: Difficulty::Beginner,
                muscle_groups: &["Chest", "Arms", "Core"],
            },
            Exercise {
                name: "Dumbbell Rows",
                sets: "3",
                reps: "10-12",
                description: "Bent over row, pull dumbbells to chest, squeeze shoulder blades",
                difficulty: Difficulty::Intermediate,
                muscle_groups: &["Back", "Arms"],
            },
            Exercise {
                name: "Overhead Press",
                sets: "3",
                reps: "8-10",
                description: "Press dumbbells or barbell overhead, engage your core",
                difficulty: Difficulty::Intermediate,
                muscle_groups: &["Shoulders", "Arms", "Core"],
            },
            Exercise {
                name: "Pull-ups",
                sets: "3",
                reps: "5-8",
                description: "Hang from bar and pull yourself up. Use assistance if needed.",
                difficulty: Difficulty::Advanced,
                muscle_groups: &["Back", "Arms"],
            },
        ],
    },
    ExerciseCategory {
        title: "Lower Body",
        description: "Strengthen your legs and glutes",
        icon: Icon::Target,
        exercises: &[
            Exercise {
                name: "Bodyweight Squats",
                sets: "3",
                reps: "12-15",
                description: "Squat down keeping knees behind toes, chest up",
                difficulty: Difficulty::Beginner,
                muscle_groups: &["Legs", "Glutes"],
            },
            Exercise {
                name: "Lunges",
                sets: "3",
                reps: "10 each leg",
                description: "Step forward into lunge, alternate legs",
                difficulty: Difficulty::Beginner,
                muscle_groups: &["Legs", "Glutes", "Core"],
            },
            Exercise {
                name: "Goblet Squats",
                sets: "3",
                reps: "12-15",
                description: "Hold dumbbell at chest, squat down keeping back straight",
                difficulty: Difficulty::Intermediate,
                muscle_groups: &["Legs", "Glutes", "Core"],
            },
            Exercise {
                name: "Single-leg Deadlifts",
                sets: "3",
                reps: "8 each leg",
                description: "Balance on one leg, hinge at hip, touch floor",
                difficulty: Difficulty::Advanced,
                muscle_groups: &["Legs", "Glutes", "Core"],
            },
        ],
    },
    ExerciseCategory {
        title: "Core & Cardio",
        description: "Build core strength and cardiovascular fitness",
        icon: Icon::Heart,
        exercises: &[
            Exercise {
                name: "Plank",
                sets: "3",
                reps: "30-60 seconds",
                description: "Hold plank position on forearms, keep body straight",
                difficulty: Difficulty::Beginner,
                muscle_groups: &["Core", "Shoulders"],
            },
            Exercise {
                name: "Mountain Climbers",
                sets: "3",
                reps: "30 seconds",
                description: "Plank position, alternate bringing knees to chest rapidly",
                difficulty: Difficulty::Intermediate,
                muscle_groups: &["Core", "Cardio"],
            },
            Exercise {
                name: "Burpees",
                sets: "3",
                reps: "8-10",
                description: "Squat, jump back to plank, push-up, jump forward, jump up",
                difficulty: Difficulty::Advanced,
                muscle_groups: &["Full Body", "Cardio"],
            },
            Exercise {
                name: "Russian Twists",
                sets: "3",
                reps: "20",
                description: "Sit with feet up, twist torso side to side",
                difficulty: Difficulty::Intermediate,
                muscle_groups: &["Core"],
            },
        ],
    },
];

static GENERAL_TIPS: [&str; 6] = [
    "Always warm up before exercising",
    "Focus on proper form over heavy weight",
    "Rest 48-72 hours between training same muscle groups",
    "Stay hydrated throughout your workout",
    "Progress gradually to avoid injury",
    "Listen to your body and rest when needed",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            categories()
                .iter()
                .map(|c| (c.title, c.icon, c.exercises.len()))
                .collect::<Vec<_>>(),
            vec![
                ("Upper Body", Icon::Dumbbell, 4),
                ("Lower Body", Icon::Target, 4),
                ("Core & Cardio", Icon::Heart, 4),
            ]
        );
    }

    #[test]
    fn test_exercise_names_unique() {
        let mut names = HashSet::new();

        for exercise in categories().iter().flat_map(|c| c.exercises.iter()) {
            assert!(names.insert(exercise.name), "duplicate {}", exercise.name);
        }
    }

    #[test]
    fn test_exercises_complete() {
        for exercise in categories().iter().flat_map(|c| c.exercises.iter()) {
            assert!(!exercise.sets.is_empty());
            assert!(!exercise.reps.is_empty());
            assert!(!exercise.description.is_empty());
            assert!(!exercise.muscle_groups.is_empty());
        }
    }

    #[test]
    fn test_general_tips() {
        assert_eq!(general_tips().len(), 6);
        assert_eq!(general_tips()[0], "Always warm up before exercising");
    }
}
