use chrono::{Datelike, Local, Weekday};

use crate::models::{Category, Day, Exercise, Schedule};

fn day(id: &str, label: &str, focus: &str, category: Category, exercises: Vec<Exercise>) -> Day {
    Day {
        id: id.to_string(),
        label: label.to_string(),
        focus: focus.to_string(),
        category,
        exercises,
    }
}

/// The built-in week. This is both the factory-reset target and the
/// fallback when no usable saved state exists.
pub fn default_schedule() -> Schedule {
    vec![
        day(
            "mon",
            "Monday",
            "Upper Body Strength",
            Category::Strength,
            vec![
                Exercise::new("Bench Press", "3 sets", "8-10 reps"),
                Exercise::new("Bent Over Rows", "3 sets", "8-10 reps"),
                Exercise::new("Overhead Press", "3 sets", "10-12 reps"),
                Exercise::new("Pull-ups (or Lat Pulldowns)", "3 sets", "AMRAP"),
                Exercise::new("Dumbbell Bicep Curls", "3 sets", "12-15 reps"),
            ],
        ),
        day(
            "tue",
            "Tuesday",
            "Lower Body Strength",
            Category::Legs,
            vec![
                Exercise::new("Barbell Squats", "3 sets", "6-8 reps"),
                Exercise::new("Romanian Deadlifts", "3 sets", "8-10 reps"),
                Exercise::new("Walking Lunges", "3 sets", "12 per leg"),
                Exercise::new("Calf Raises", "4 sets", "15-20 reps"),
                Exercise::new("Plank", "3 sets", "60 seconds"),
            ],
        ),
        day(
            "wed",
            "Wednesday",
            "Active Recovery / Cardio",
            Category::Cardio,
            vec![
                Exercise::new("Light Jog or Brisk Walk", "1 session", "30 mins"),
                Exercise::new("Dynamic Stretching", "1 session", "15 mins"),
                Exercise::new("Foam Rolling", "1 session", "10 mins"),
            ],
        ),
        day(
            "thu",
            "Thursday",
            "Upper Body Hypertrophy",
            Category::Strength,
            vec![
                Exercise::new("Incline Dumbbell Press", "3 sets", "10-12 reps"),
                Exercise::new("Seated Cable Rows", "3 sets", "12-15 reps"),
                Exercise::new("Lateral Raises", "3 sets", "15-20 reps"),
                Exercise::new("Tricep Rope Pushdowns", "3 sets", "12-15 reps"),
                Exercise::new("Face Pulls", "3 sets", "15-20 reps"),
            ],
        ),
        day(
            "fri",
            "Friday",
            "Lower Body & Core",
            Category::Legs,
            vec![
                Exercise::new("Leg Press", "3 sets", "10-12 reps"),
                Exercise::new("Leg Curls (Seated or Lying)", "3 sets", "12-15 reps"),
                Exercise::new("Leg Extensions", "3 sets", "12-15 reps"),
                Exercise::new("Hanging Leg Raises", "3 sets", "10-12 reps"),
                Exercise::new("Russian Twists", "3 sets", "20 total"),
            ],
        ),
        day(
            "sat",
            "Saturday",
            "Conditioning / Fun",
            Category::Cardio,
            vec![
                Exercise::new("HIIT Circuit or Sport", "1 session", "20-30 mins"),
                Exercise::new("Full Body Stretch", "1 session", "20 mins"),
            ],
        ),
        day(
            "sun",
            "Sunday",
            "Rest Day",
            Category::Rest,
            vec![
                Exercise::new("Rest & Recover", "-", "All day"),
                Exercise::new("Meal Prep (Optional)", "-", "-"),
            ],
        ),
    ]
}

/// Day id matching the current local weekday, for the "Today" badge.
pub fn today_id() -> &'static str {
    match Local::now().weekday() {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_seven_days_monday_first() {
        let schedule = default_schedule();
        let ids: Vec<&str> = schedule.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);
    }

    #[test]
    fn seed_days_are_nonempty_and_unstarted() {
        for day in default_schedule() {
            assert!(!day.exercises.is_empty(), "{} has no exercises", day.id);
            assert!(day.exercises.iter().all(|ex| !ex.completed));
        }
    }

    #[test]
    fn today_id_is_a_seed_id() {
        let schedule = default_schedule();
        assert!(schedule.iter().any(|d| d.id == today_id()));
    }
}
