use dialoguer::{theme::ColorfulTheme, Input};

/// Prompt for the starting budget when no usable persisted state exists.
pub fn prompt_initial_budget(theme: &ColorfulTheme) -> Result<f64, dialoguer::Error> {
    Input::<f64>::with_theme(theme)
        .with_prompt("Enter your initial budget")
        .validate_with(|value: &f64| {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("Budget must not be negative. Please try again.")
            }
        })
        .interact_text()
}

/// Prompt for an expense description: a non-empty alphabetic token.
pub fn prompt_description(theme: &ColorfulTheme) -> Result<String, dialoguer::Error> {
    Input::<String>::with_theme(theme)
        .with_prompt("Enter expense description")
        .validate_with(|input: &String| {
            let trimmed = input.trim();
            if !trimmed.is_empty() && trimmed.chars().all(char::is_alphabetic) {
                Ok(())
            } else {
                Err("Description must be a word. Please try again.")
            }
        })
        .interact_text()
}

/// Prompt for an expense amount: a positive number.
pub fn prompt_amount(theme: &ColorfulTheme) -> Result<f64, dialoguer::Error> {
    Input::<f64>::with_theme(theme)
        .with_prompt("Enter expense amount")
        .validate_with(|value: &f64| {
            if *value > 0.0 {
                Ok(())
            } else {
                Err("Amount must be a positive number. Please try again.")
            }
        })
        .interact_text()
}
