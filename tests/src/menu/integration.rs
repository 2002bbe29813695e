use std::collections::HashSet;

use folio_common::profile::Profile;
use folio_core::handlers::tips::TIPS;
use folio_core::menu::FAREWELL;
use folio_core::testing::ScriptedPrompter;
use folio_core::{LoopState, MenuChoice, PortfolioError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::support::{position, session};

fn idx(choice: MenuChoice) -> usize {
    choice.index()
}

/// Walks every menu entry once and leaves.
#[tokio::test]
async fn full_tour_visits_every_handler_in_order() -> anyhow::Result<()> {
    let prompter = ScriptedPrompter::new()
        .selects([
            idx(MenuChoice::ViewDetails),
            idx(MenuChoice::ShowProjects),
            idx(MenuChoice::ShowTip),
            idx(MenuChoice::TellJoke),
            idx(MenuChoice::Exit),
        ])
        .confirms([true, true]);
    let mut portfolio = session(prompter);

    portfolio.run().await?;

    assert_eq!(portfolio.state(), LoopState::Exited);
    assert_eq!(portfolio.prompter().select_count(), 5);
    assert_eq!(portfolio.prompter().confirm_count(), 2);

    let text = portfolio.screen().text();
    let about = position(&text, "About Me");
    let projects = position(&text, "My Projects");
    let tip = position(&text, "Random Coding Tip");
    let joke = position(&text, "Why do programmers prefer dark mode?");
    let goodbye = position(&text, FAREWELL);
    assert!(about < projects && projects < tip && tip < joke && joke < goodbye);
    Ok(())
}

#[tokio::test]
async fn random_selections_without_exit_always_come_back_to_idle() {
    let mut rng = StdRng::seed_from_u64(42);
    let selections: Vec<usize> = (0..60).map(|_| rng.random_range(0..4)).collect();
    let confirms = vec![true; selections.len() * 2];
    let mut portfolio = session(
        ScriptedPrompter::new()
            .selects(selections.clone())
            .confirms(confirms),
    );

    for choice in &selections {
        let state = portfolio.step().await.unwrap();
        assert_eq!(state, LoopState::Idle, "after {:?}", MenuChoice::from_index(*choice));
    }
    assert_eq!(portfolio.prompter().select_count(), selections.len());
}

#[tokio::test]
async fn exit_is_final() {
    let prompter = ScriptedPrompter::new().selects([
        idx(MenuChoice::Exit),
        idx(MenuChoice::ViewDetails),
        idx(MenuChoice::ViewDetails),
    ]);
    let mut portfolio = session(prompter);

    portfolio.run().await.unwrap();

    assert_eq!(portfolio.prompter().select_count(), 1);
    let text = portfolio.screen().text();
    assert!(text.contains(FAREWELL));
    assert!(!text.contains("About Me"));
}

#[tokio::test]
async fn declining_a_project_returns_to_the_menu() {
    let profile = Profile::builtin();
    let prompter = ScriptedPrompter::new()
        .selects([idx(MenuChoice::ShowProjects), idx(MenuChoice::Exit)])
        .confirms([true, false]);
    let mut portfolio = session(prompter);

    portfolio.run().await.unwrap();

    assert_eq!(portfolio.prompter().confirm_count(), 2);
    let text = portfolio.screen().text();
    assert!(text.contains(profile.projects[0].name));
    assert!(text.contains(profile.projects[1].name));
    assert!(!text.contains(profile.projects[2].name));
}

#[tokio::test]
async fn tips_through_the_menu_cover_the_whole_list() {
    let rounds = 200;
    let prompter = ScriptedPrompter::new()
        .selects(std::iter::repeat_n(idx(MenuChoice::ShowTip), rounds))
        .selects([idx(MenuChoice::Exit)]);
    let mut portfolio = session(prompter);

    portfolio.run().await.unwrap();

    let text = portfolio.screen().text();
    let seen: HashSet<&str> = TIPS.iter().copied().filter(|tip| text.contains(tip)).collect();
    assert_eq!(seen.len(), TIPS.len());
}

#[tokio::test]
async fn details_show_contact_fields_verbatim() {
    let profile = Profile::builtin();
    let prompter = ScriptedPrompter::new().selects([idx(MenuChoice::ViewDetails), idx(MenuChoice::Exit)]);
    let mut portfolio = session(prompter);

    portfolio.run().await.unwrap();

    let text = portfolio.screen().text();
    for field in [profile.name, profile.role, profile.github, profile.email] {
        position(&text, field);
    }
}

#[tokio::test]
async fn prompt_failure_mid_projects_ends_the_session() {
    let prompter = ScriptedPrompter::new().selects([idx(MenuChoice::ShowProjects)]);
    let mut portfolio = session(prompter);

    let err = portfolio.run().await.unwrap_err();

    assert!(matches!(err, PortfolioError::Input(_)));
    assert_eq!(portfolio.state(), LoopState::Dispatching(MenuChoice::ShowProjects));
}
