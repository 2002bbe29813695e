use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use folio_core::PortfolioError;
use folio_core::ports::Prompter;

/// Interactive prompts on the controlling terminal.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, PortfolioError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| PortfolioError::Input(e.to_string()))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PortfolioError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| PortfolioError::Input(e.to_string()))
    }
}
