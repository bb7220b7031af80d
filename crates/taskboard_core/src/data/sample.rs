//! Built-in sample board shown when no board document is supplied.

use crate::model::board::{Board, Category, Quadrant};
use crate::model::task::Task;

const DO_NOW_TASKS: &[&str] = &[
    "📊 Data Project MVP (Due TODAY) (highest urgency today)",
    "📝 Report Meeting (Data Project) (tonight)",
    "🧥 Order Ali’s Hoodie (must order ASAP)",
    "🔬 Daily AR/AI Research (~30–45 mins, realistic today)",
    "📅 Two quizzes (complete early next week)",
    "🛡️ Security Beta Project (start soon, Apr 22)",
    "📈 Data Presentation (Apr 26)",
    "🤝 Team Project Check-in #4 (Apr 21)",
];

const SCHEDULE_TASKS: &[&str] = &[
    "🏕️ Plan End-of-May Cabin Trip",
    "🧑‍🤝‍🧑 Monthly Meetup Plans (Shelby/Baseball)",
    "📌 Regular Job Spreadsheet Updates",
    "💪 Short Daily Cardio/Core Exercise (~20–30 mins)",
    "💻 Resume Leetcode after Hackathon (after Apr 20) (clearly paused)",
    "🦷 Wisdom Teeth Appointment Scheduling",
    "✈️ Hackathon (Travel Apr 19–20, fully blocked)",
];

const DELEGATE_TASKS: &[&str] = &[
    "💰 Deposit Cash (quick errand) (today)",
    "🌱 Water Jesse’s Plants (daily quick)",
    "🍽️ Ask Friends about May 1 Dinner (moved to tomorrow)",
];

const DROP_TASKS: &[&str] = &[
    "📖 Casual Reading",
    "🎮 Casual Gaming/Relaxation",
    "🕶️ $200 Ant Farm Visualization (motivation boost)",
    "👗 Fashion Research (Reward)",
    "🐝 Optional Social (if energy)",
];

/// Returns the built-in four-quadrant sample board.
///
/// Task ids are generated fresh on every call.
pub fn sample_board() -> Board {
    Board::from_columns([
        category(
            Quadrant::DoNow,
            "🔥 Urgent & Important (Immediate Deadlines)",
            "bg-red-600 text-white",
            DO_NOW_TASKS,
        ),
        category(
            Quadrant::Schedule,
            "📅 Important, Not Urgent (Strategic Progress)",
            "bg-purple-600 text-white",
            SCHEDULE_TASKS,
        ),
        category(
            Quadrant::Delegate,
            "⚡ Urgent, Not Important (Quick Tasks)",
            "bg-yellow-400 text-gray-900",
            DELEGATE_TASKS,
        ),
        category(
            Quadrant::Drop,
            "🌿 Not Urgent, Not Important",
            "bg-green-600 text-white",
            DROP_TASKS,
        ),
    ])
}

fn category(quadrant: Quadrant, title: &str, header_class: &str, labels: &[&str]) -> Category {
    Category::new(
        quadrant,
        title,
        header_class,
        labels.iter().map(|label| Task::new(*label)).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::sample_board;
    use crate::model::board::{Board, Quadrant};
    use crate::transform::normalize::is_normalized;

    #[test]
    fn sample_board_has_all_quadrants_and_tasks() {
        let board = sample_board();
        assert_eq!(board.task_count(), 23);
        assert_eq!(board.category(Quadrant::DoNow).tasks.len(), 8);
        assert_eq!(board.category(Quadrant::Drop).header_class, "bg-green-600 text-white");
    }

    #[test]
    fn sample_board_passes_board_validation() {
        let board = sample_board();
        let rebuilt = Board::try_new(board.categories().to_vec()).unwrap();
        assert_eq!(rebuilt, board);
    }

    #[test]
    fn every_sample_label_normalizes_to_plain_text() {
        let board = sample_board();
        for label in board.flat_labels() {
            assert!(is_normalized(&label), "label kept a prefix: {label:?}");
            assert!(label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric() || c == '$'));
        }
    }
}
