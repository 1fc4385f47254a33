//! Labels and progress figures shown around each lifecycle stage.

use crate::core::cursor::StageCursor;
use crate::domain::model::Stage;

pub const NO_FUN_FACT: &str = "No fun fact available for this stage.";

pub fn fun_fact(stage: &Stage) -> &str {
    stage
        .fun_fact
        .as_deref()
        .filter(|fact| !fact.trim().is_empty())
        .unwrap_or(NO_FUN_FACT)
}

/// Share of the journey completed once stage `index` is reached, rounded to a whole percent.
pub fn progress_percent(index: usize, len: usize) -> u32 {
    if len == 0 {
        return 0;
    }
    (((index + 1) as f64 / len as f64) * 100.0).round() as u32
}

pub fn phase_label(index: usize, len: usize) -> String {
    format!("Phase {} of {}", index + 1, len)
}

pub fn badge(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn transition_label(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        "Final"
    } else {
        "Transforms"
    }
}

pub fn stage_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => format!("{}{} Stage", first.to_uppercase(), chars.as_str()),
        None => "Stage".to_string(),
    }
}

/// One progress dot per stage; a dot is reached once the cursor is at or past it.
pub fn progress_dots(cursor: &StageCursor) -> Vec<bool> {
    (0..cursor.len()).map(|i| i <= cursor.index()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 4), 25);
        assert_eq!(progress_percent(3, 4), 100);
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
    }

    #[test]
    fn test_labels() {
        assert_eq!(phase_label(1, 4), "Phase 2 of 4");
        assert_eq!(badge(0), "01");
        assert_eq!(badge(11), "12");
        assert_eq!(transition_label(2, 4), "Transforms");
        assert_eq!(transition_label(3, 4), "Final");
        assert_eq!(stage_label("larva"), "Larva Stage");
        assert_eq!(stage_label(""), "Stage");
    }

    #[test]
    fn test_missing_fun_fact_falls_back() {
        let mut stage = Stage {
            id: "egg".to_string(),
            title: "Egg Stage".to_string(),
            subtitle: "The Beginning of Life".to_string(),
            description: "A tiny egg.".to_string(),
            duration_label: "3-7 days".to_string(),
            media_ref: "/egg.jpg".to_string(),
            icon: String::new(),
            fun_fact: None,
        };
        assert_eq!(fun_fact(&stage), NO_FUN_FACT);

        stage.fun_fact = Some("   ".to_string());
        assert_eq!(fun_fact(&stage), NO_FUN_FACT);

        stage.fun_fact = Some("Laid on leaves.".to_string());
        assert_eq!(fun_fact(&stage), "Laid on leaves.");
    }
}
