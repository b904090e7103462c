//! The weekly action resolver.
//!
//! Each non-contest week the player is offered a menu: a random sample of
//! the training catalog plus one guaranteed idle entry. Exactly one entry
//! is resolved. Validation runs in a fixed order (funds, weather, required
//! trait) and a failed check cancels the action with no side effects.

use stargazer_ledger::{Adjustment, EntryKind, Ledger};
use stargazer_roster::{Roster, StudentConfig};
use stargazer_types::{Dice, TrainingTemplate, TraitKind, Weather};
use tracing::info;

/// One line of the weekly menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    /// Rest for the week: no cost, no effect.
    Idle,
    /// A catalog training activity.
    Training(TrainingTemplate),
}

impl MenuEntry {
    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Take the week off",
            Self::Training(template) => &template.name,
        }
    }
}

/// Draw this week's menu: `size` distinct activities, then the idle entry.
pub fn draw_menu(catalog: &[TrainingTemplate], size: usize, dice: &mut dyn Dice) -> Vec<MenuEntry> {
    let mut menu: Vec<MenuEntry> = dice
        .distinct(catalog.len(), size)
        .into_iter()
        .filter_map(|index| catalog.get(index))
        .cloned()
        .map(MenuEntry::Training)
        .collect();
    menu.push(MenuEntry::Idle);
    menu
}

/// Why a chosen activity was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionRejection {
    /// The club cannot pay for the activity.
    #[error("{activity} was cancelled: it costs {cost} but the club only has {balance}")]
    InsufficientFunds {
        /// Activity name.
        activity: String,
        /// Its cost.
        cost: i64,
        /// Balance at the time of the check.
        balance: i64,
    },

    /// The activity needs different skies.
    #[error("{activity} was cancelled: the weather is {}", .weather.label())]
    WrongWeather {
        /// Activity name.
        activity: String,
        /// This week's weather.
        weather: Weather,
    },

    /// Nobody active holds the trait the activity needs.
    #[error("{activity} was cancelled: nobody in the club is a {required:?}")]
    MissingTrait {
        /// Activity name.
        activity: String,
        /// The trait the activity needs.
        required: TraitKind,
    },
}

/// What a successfully resolved menu entry did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The club rested.
    Idle,
    /// An activity ran.
    Trained {
        /// Activity name.
        activity: String,
        /// The net ledger movement (`fund_gain - cost`).
        funds: Adjustment,
        /// Students who withdrew under the activity's stress.
        withdrawn: Vec<String>,
    },
}

/// Check an activity's prerequisites without changing anything.
///
/// # Errors
///
/// Returns the first failed prerequisite, checked in the order funds,
/// weather, required trait.
pub fn validate_training(
    template: &TrainingTemplate,
    roster: &Roster,
    ledger: &Ledger,
    weather: Weather,
) -> Result<(), ActionRejection> {
    if !ledger.can_afford(template.cost) {
        return Err(ActionRejection::InsufficientFunds {
            activity: template.name.clone(),
            cost: template.cost,
            balance: ledger.balance(),
        });
    }
    if let Some(allowed) = &template.weather
        && !allowed.contains(&weather)
    {
        return Err(ActionRejection::WrongWeather {
            activity: template.name.clone(),
            weather,
        });
    }
    if let Some(required) = template.required_trait
        && !roster.any_active_with(required)
    {
        return Err(ActionRejection::MissingTrait {
            activity: template.name.clone(),
            required,
        });
    }
    Ok(())
}

/// Resolve the chosen menu entry.
///
/// On success the ledger moves by `fund_gain - cost`, then every active
/// student trains and takes the activity's stress in one pass.
///
/// # Errors
///
/// Returns an [`ActionRejection`] when a prerequisite fails; nothing has
/// been changed in that case.
pub fn resolve_action(
    entry: &MenuEntry,
    roster: &mut Roster,
    ledger: &mut Ledger,
    weather: Weather,
    students: &StudentConfig,
    dice: &mut dyn Dice,
) -> Result<Resolution, ActionRejection> {
    let template = match entry {
        MenuEntry::Idle => return Ok(Resolution::Idle),
        MenuEntry::Training(template) => template,
    };
    if let Err(rejection) = validate_training(template, roster, ledger, weather) {
        info!(activity = %template.name, %rejection, "Training rejected");
        return Err(rejection);
    }

    let net = template.fund_gain.saturating_sub(template.cost);
    let funds = ledger.adjust(net, EntryKind::Training, &template.name);

    let mut withdrawn = Vec::new();
    for student in roster.active_mut() {
        student.adjust_skills(&template.gains, 1.0);
        if student.apply_stress(template.stress, students, dice) {
            withdrawn.push(student.name.clone());
        }
    }

    info!(
        activity = %template.name,
        net,
        withdrawn = withdrawn.len(),
        "Training resolved"
    );
    Ok(Resolution::Trained {
        activity: template.name.clone(),
        funds,
        withdrawn,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use stargazer_roster::Student;
    use stargazer_types::{Skill, skill_map};

    use super::*;

    fn template(cost: i64) -> TrainingTemplate {
        TrainingTemplate {
            name: "Problem set marathon".to_owned(),
            cost,
            stress: 5.0,
            gains: skill_map([(Skill::Theory, 3.0)]),
            weather: None,
            required_trait: None,
            fund_gain: 0,
        }
    }

    fn roster() -> Roster {
        [Student::uniform("A", 20.0), Student::uniform("B", 40.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn unaffordable_training_changes_nothing() {
        let mut roster = roster();
        let before: Vec<Student> = roster.iter().cloned().collect();
        let mut ledger = Ledger::new(50);
        let mut rng = SmallRng::seed_from_u64(5);
        let result = resolve_action(
            &MenuEntry::Training(template(100)),
            &mut roster,
            &mut ledger,
            Weather::Clear,
            &StudentConfig::default(),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(ActionRejection::InsufficientFunds {
                cost: 100,
                balance: 50,
                ..
            })
        ));
        assert_eq!(ledger.balance(), 50);
        assert!(ledger.entries().is_empty());
        assert_eq!(roster.iter().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn wrong_weather_is_checked_after_funds() {
        let mut outdoor = template(100);
        outdoor.weather = Some(vec![Weather::Clear, Weather::FewClouds]);
        let roster = roster();

        let broke = validate_training(&outdoor, &roster, &Ledger::new(0), Weather::Rain);
        assert!(matches!(broke, Err(ActionRejection::InsufficientFunds { .. })));

        let rained_out = validate_training(&outdoor, &roster, &Ledger::new(500), Weather::Rain);
        assert!(matches!(rained_out, Err(ActionRejection::WrongWeather { .. })));

        assert!(validate_training(&outdoor, &roster, &Ledger::new(500), Weather::FewClouds).is_ok());
    }

    #[test]
    fn required_trait_must_be_on_the_roster() {
        let mut outing = template(0);
        outing.required_trait = Some(TraitKind::Furry);
        let mut roster = roster();
        let missing = validate_training(&outing, &roster, &Ledger::new(0), Weather::Clear);
        assert!(matches!(missing, Err(ActionRejection::MissingTrait { .. })));

        roster.iter_mut().next().unwrap().traits.push(TraitKind::Furry);
        assert!(validate_training(&outing, &roster, &Ledger::new(0), Weather::Clear).is_ok());
    }

    #[test]
    fn rejection_messages_are_distinct() {
        let funds = ActionRejection::InsufficientFunds {
            activity: "X".to_owned(),
            cost: 1,
            balance: 0,
        };
        let weather = ActionRejection::WrongWeather {
            activity: "X".to_owned(),
            weather: Weather::Rain,
        };
        let missing = ActionRejection::MissingTrait {
            activity: "X".to_owned(),
            required: TraitKind::Furry,
        };
        assert_ne!(funds.to_string(), weather.to_string());
        assert_ne!(weather.to_string(), missing.to_string());
        assert!(weather.to_string().contains("rain"));
    }

    #[test]
    fn successful_training_moves_funds_and_trains_everyone() {
        let mut paid = template(100);
        paid.fund_gain = 30;
        let mut roster = roster();
        let mut ledger = Ledger::new(500);
        let mut rng = SmallRng::seed_from_u64(5);
        let resolution = resolve_action(
            &MenuEntry::Training(paid),
            &mut roster,
            &mut ledger,
            Weather::Cloudy,
            &StudentConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert!(matches!(resolution, Resolution::Trained { .. }));
        assert_eq!(ledger.balance(), 430);
        for student in roster.iter() {
            assert!((student.stress - 5.0).abs() < 1e-9);
        }
        let theory: Vec<f64> = roster.iter().map(|s| s.attribute(Skill::Theory)).collect();
        assert_eq!(theory.len(), 2);
        assert!((theory.first().copied().unwrap() - 23.0).abs() < 1e-9);
        assert!((theory.get(1).copied().unwrap() - 43.0).abs() < 1e-9);
    }

    #[test]
    fn idle_always_resolves() {
        let mut roster = roster();
        let mut ledger = Ledger::new(-10);
        let mut rng = SmallRng::seed_from_u64(5);
        let resolution = resolve_action(
            &MenuEntry::Idle,
            &mut roster,
            &mut ledger,
            Weather::Rain,
            &StudentConfig::default(),
            &mut rng,
        );
        assert_eq!(resolution, Ok(Resolution::Idle));
        assert_eq!(ledger.balance(), -10);
    }

    #[test]
    fn menu_ends_with_the_idle_entry() {
        let catalog: Vec<TrainingTemplate> = (0..8).map(|_| template(10)).collect();
        let mut rng = SmallRng::seed_from_u64(9);
        let menu = draw_menu(&catalog, 5, &mut rng);
        assert_eq!(menu.len(), 6);
        assert_eq!(menu.last(), Some(&MenuEntry::Idle));
        assert_eq!(
            menu.iter()
                .filter(|e| matches!(e, MenuEntry::Idle))
                .count(),
            1
        );
    }
}
