//! Terminal rendering of grid and reader views.

use colored::Colorize;
use tales_application::{Effect, GridView, ReaderView, StoryCard};
use tales_core::Theme;

const PROGRESS_WIDTH: usize = 20;

/// Formats one effect for the terminal.
pub fn format_effect(effect: &Effect) -> String {
    match effect {
        Effect::Render(grid) => format_grid(grid),
        Effect::ApplyTheme(theme) => format_theme(*theme),
        Effect::Reader(view) => format_reader(view),
        Effect::ReaderClosed => "Reader closed.".dimmed().to_string(),
    }
}

pub fn format_theme(theme: Theme) -> String {
    format!("Theme: {}", theme.as_ref().bold())
}

pub fn format_grid(grid: &GridView) -> String {
    match grid {
        GridView::Loading { message } => message.dimmed().to_string(),
        GridView::Failed { title, message } => {
            format!("{}\n{}", title.red().bold(), message.red())
        }
        GridView::Empty(placeholder) => {
            format!("{}\n{}", placeholder.title.bold(), placeholder.hint.dimmed())
        }
        GridView::Cards { cards } => cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn format_card(card: &StoryCard) -> String {
    let save = if card.saved {
        card.save_label.yellow().bold()
    } else {
        card.save_label.normal()
    };
    format!(
        "{} {}\n  [{}] [{}]\n  {}\n  {} #{}  |  {}",
        format!("#{}", card.id).dimmed(),
        card.title.bold(),
        card.category_label.cyan(),
        card.length_label,
        card.summary,
        card.read_label.green(),
        card.id,
        save,
    )
}

pub fn format_reader(view: &ReaderView) -> String {
    let mut out = format!(
        "{}  [{}]  {}\n{}\n",
        view.title.bold(),
        view.category_label.cyan(),
        if view.saved {
            view.save_label.yellow().bold()
        } else {
            view.save_label.normal()
        },
        progress_bar(view.progress),
    );
    if let Some(px) = view.font_size {
        out.push_str(&format!("{}\n", format!("font: {px}px").dimmed()));
    }
    for paragraph in &view.paragraphs {
        out.push('\n');
        out.push_str(paragraph);
        out.push('\n');
    }
    out
}

/// Fixed-width bar followed by the rounded percentage.
pub fn progress_bar(progress: f64) -> String {
    let filled = ((progress / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled),
        progress
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tales_application::Placeholder;

    fn card(id: u64, saved: bool) -> StoryCard {
        StoryCard {
            id,
            title: format!("Title {id}"),
            category_label: "Horror".to_string(),
            length_label: "4 min read".to_string(),
            summary: "Something waits".to_string(),
            read_label: "Read".to_string(),
            saved,
            save_label: if saved { "Saved" } else { "Save" }.to_string(),
        }
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}] 0%", ".".repeat(20)));
        assert_eq!(progress_bar(100.0), format!("[{}] 100%", "#".repeat(20)));
        assert_eq!(progress_bar(50.0), format!("[{}{}] 50%", "#".repeat(10), ".".repeat(10)));
    }

    #[test]
    fn test_grid_lists_every_card() {
        let text = format_grid(&GridView::Cards {
            cards: vec![card(1, false), card(2, true)],
        });
        assert!(text.contains("Title 1"));
        assert!(text.contains("Title 2"));
        assert!(text.contains("Saved"));
    }

    #[test]
    fn test_placeholder_shows_title_and_hint() {
        let text = format_grid(&GridView::Empty(Placeholder {
            title: "No matching stories.".to_string(),
            hint: "Try another category.".to_string(),
        }));
        assert!(text.contains("No matching stories."));
        assert!(text.contains("Try another category."));
    }

    #[test]
    fn test_reader_prints_paragraphs_in_order() {
        let view = ReaderView {
            id: 2,
            title: "The Cellar".to_string(),
            category_label: "Horror".to_string(),
            paragraphs: vec!["steps".to_string(), "dark".to_string()],
            progress: 25.0,
            font_size: Some(20.0),
            saved: false,
            save_label: "Save".to_string(),
        };
        let text = format_reader(&view);
        let steps = text.find("steps").unwrap();
        let dark = text.find("dark").unwrap();
        assert!(steps < dark);
        assert!(text.contains("25%"));
        assert!(text.contains("font: 20px"));
    }
}
