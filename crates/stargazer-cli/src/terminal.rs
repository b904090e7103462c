//! Line-oriented terminal I/O.
//!
//! [`Terminal`] owns the input and output streams and provides the two
//! interaction primitives the game needs: a numbered pick that re-prompts
//! until it gets a valid answer, and a blocking "continue" pause.
//! [`TerminalDecisionSource`] answers the engine's decision points through
//! it, and [`Narrator`] prints what each week did.
//!
//! Everything is generic over [`BufRead`] and [`Write`] so tests can drive
//! the prompts from byte slices.

use std::io::{self, BufRead, Write};

use stargazer_core::decision::idle_index;
use stargazer_core::{
    ContestOutcome, DecisionSource, EndReason, MenuEntry, Resolution, Session, SessionResult,
    TickCallback, TickSummary,
};
use stargazer_types::{MiniEvent, Skill, Status, Tier, TraitKind, grade_for};
use stargazer_world::find_trait;
use tracing::warn;

const RULE: &str =
    "========================================================================";
const THIN_RULE: &str =
    "------------------------------------------------------------------------";

/// Numbered prompts and pauses over a pair of streams.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Wrap an input and an output stream.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// The output stream, for rendering.
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Whether the input stream has reached end of file.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Ask for one of `count` options numbered from 1.
    ///
    /// Re-prompts until the answer is in range. Returns the zero-based
    /// index, or `None` once the input is closed.
    pub fn choose(&mut self, count: usize) -> io::Result<Option<usize>> {
        if count == 0 {
            return Ok(None);
        }
        loop {
            write!(self.output, "Choose 1-{count}: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(pick) if (1..=count).contains(&pick) => return Ok(Some(pick.saturating_sub(1))),
                _ => writeln!(self.output, "Please enter a number between 1 and {count}.")?,
            }
        }
    }

    /// Block until the player presses Enter.
    pub fn pause(&mut self) -> io::Result<()> {
        write!(self.output, "\n>> Press Enter to continue...")?;
        self.read_line()?;
        writeln!(self.output)
    }

    /// Ask how many students to recruit.
    ///
    /// Numbers are clamped into `[min, max]`, negatives included; anything
    /// that is not a number yields `default`.
    pub fn ask_roster_size(&mut self, default: usize, min: usize, max: usize) -> io::Result<usize> {
        write!(self.output, "How many students will you recruit? ({min}-{max}): ")?;
        let Some(line) = self.read_line()? else {
            return Ok(default);
        };
        if let Ok(requested) = line.parse::<i64>() {
            let size = usize::try_from(requested).map_or(min, |size| size.clamp(min, max.max(min)));
            if usize::try_from(requested).ok() != Some(size) {
                writeln!(self.output, "The club takes {min} to {max} students; recruiting {size}.")?;
            }
            Ok(size)
        } else {
            writeln!(self.output, "That is not a number; recruiting {default}.")?;
            Ok(default)
        }
    }
}

/// Answers decision points by prompting the player.
pub struct TerminalDecisionSource<R, W> {
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> TerminalDecisionSource<R, W> {
    /// Prompt through `terminal`.
    pub const fn new(terminal: Terminal<R, W>) -> Self {
        Self { terminal }
    }

    /// Turn a prompt result into an index, falling back on closed input or
    /// a broken stream.
    fn settle(result: io::Result<Option<usize>>, fallback: usize, point: &str) -> usize {
        match result {
            Ok(Some(index)) => index,
            Ok(None) => fallback,
            Err(error) => {
                warn!(%error, point, "Prompt failed, using the default choice");
                fallback
            }
        }
    }

    fn pause_quietly(&mut self) {
        if let Err(error) = self.terminal.pause() {
            warn!(%error, "Pause failed");
        }
    }

    fn prompt_training(&mut self, session: &Session) -> io::Result<Option<usize>> {
        render_status(self.terminal.output(), session)?;
        render_menu(self.terminal.output(), session)?;
        self.terminal.choose(session.menu.len())
    }

    fn prompt_offer(
        &mut self,
        tier: Tier,
        day: u32,
        days: u32,
        offers: &[&MiniEvent],
    ) -> io::Result<Option<usize>> {
        let out = self.terminal.output();
        writeln!(out, "\n--- {tier}: day {day} of {days} ---")?;
        writeln!(out, "How will the team spend the day?")?;
        for (number, offer) in (1..).zip(offers) {
            writeln!(out, "  {number}. {}", offer.name)?;
        }
        self.terminal.choose(offers.len())
    }

    fn prompt_branch(&mut self, event: &MiniEvent) -> io::Result<Option<usize>> {
        let out = self.terminal.output();
        writeln!(out, "\n{}", event.name)?;
        for (number, choice) in (1..).zip(&event.choices) {
            let social = if choice.social { " (social)" } else { "" };
            writeln!(out, "  {number}. {}{social}", choice.label)?;
        }
        self.terminal.choose(event.choices.len())
    }
}

impl<R: BufRead, W: Write> DecisionSource for TerminalDecisionSource<R, W> {
    fn choose_training(&mut self, session: &Session) -> usize {
        let result = self.prompt_training(session);
        Self::settle(result, idle_index(&session.menu), "training")
    }

    fn choose_mini_event(
        &mut self,
        _session: &Session,
        tier: Tier,
        day: u32,
        days: u32,
        offers: &[&MiniEvent],
    ) -> usize {
        let result = self.prompt_offer(tier, day, days, offers);
        Self::settle(result, 0, "mini_event")
    }

    fn choose_branch(&mut self, _session: &Session, event: &MiniEvent) -> usize {
        let result = self.prompt_branch(event);
        Self::settle(result, 0, "branch")
    }

    fn on_contest_start(&mut self, _session: &Session, tier: Tier) {
        if let Err(error) = writeln!(self.terminal.output(), "\n{RULE}\n The {tier} begins!\n{RULE}") {
            warn!(%error, "Contest banner failed");
        }
        self.pause_quietly();
    }

    fn on_contest_result(&mut self, _session: &Session, outcome: &ContestOutcome) {
        if let Err(error) = render_outcome(self.terminal.output(), outcome) {
            warn!(%error, "Contest results failed to render");
        }
        self.pause_quietly();
    }
}

/// Prints a short account of every week.
///
/// In autoplay nobody is watching the contest narration, so the narrator
/// also prints contest standings.
pub struct Narrator<W> {
    output: W,
    contests: bool,
}

impl<W: Write> Narrator<W> {
    /// Narrate to `output`; `contests` adds standings for contest weeks.
    pub const fn new(output: W, contests: bool) -> Self {
        Self { output, contests }
    }

    fn render(&mut self, summary: &TickSummary) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(
            out,
            "[Y{} M{:02} W{}] {}",
            summary.year,
            summary.month,
            summary.week,
            summary.weather.label()
        )?;
        match &summary.action {
            Some(Ok(Resolution::Idle)) => writeln!(out, "  The club took the week off.")?,
            Some(Ok(Resolution::Trained {
                activity,
                funds,
                withdrawn,
            })) => {
                writeln!(
                    out,
                    "  {activity}: {:+} (funds {}).",
                    funds.amount, funds.balance
                )?;
                for name in withdrawn {
                    writeln!(out, "  {name} could not take it any more and left the club.")?;
                }
            }
            Some(Err(rejection)) => writeln!(out, "  {rejection}.")?,
            None => {}
        }
        for event in &summary.events {
            writeln!(out, "  {}", event.description)?;
            for name in &event.report.withdrawn {
                writeln!(out, "  {name} left the club.")?;
            }
        }
        if self.contests
            && let Some(outcome) = &summary.contest
        {
            render_outcome(out, outcome)?;
        }
        if summary.year_ended {
            writeln!(out, "  A new academic year begins. Honors are reset.")?;
        }
        Ok(())
    }
}

impl<W: Write> TickCallback for Narrator<W> {
    fn on_tick(&mut self, summary: &TickSummary, _session: &Session) {
        if let Err(error) = self.render(summary) {
            warn!(%error, "Week summary failed to render");
        }
    }
}

/// Print the opening banner.
pub fn render_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, " STARGAZER: coach an astronomy olympiad club")?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Train your students through the city, province and national rounds."
    )?;
    writeln!(
        out,
        "Win the International Olympiad before time runs out, and mind their stress."
    )?;
    writeln!(out)
}

fn trait_name(session: &Session, kind: TraitKind) -> String {
    find_trait(&session.catalogs.traits, kind)
        .map_or_else(|| format!("{kind:?}"), |template| template.name.clone())
}

/// Print the weekly status screen: date, funds, countdown, roster and the
/// recent journal.
pub fn render_status(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let calendar = &session.calendar;
    writeln!(out, "\n{RULE}")?;
    writeln!(
        out,
        " Year {} | Month {:02} | Week {} | Weather: {} | Funds: {}",
        calendar.year(),
        calendar.month(),
        calendar.week(),
        session.weather.label(),
        session.ledger.balance()
    )?;
    match session.countdown() {
        Some(countdown) => {
            writeln!(out, " {} in {} week(s)", countdown.tier, countdown.weeks)?;
        }
        None => writeln!(out, " No contests remain.")?,
    }
    writeln!(out, "{THIN_RULE}")?;

    write!(out, " {:<16}", "Name")?;
    for skill in Skill::ALL {
        write!(out, "{:<13}", skill.label())?;
    }
    writeln!(out, "{:>6}  Notes", "Stress")?;
    for student in session.roster.iter() {
        write!(out, " {:<16}", student.name)?;
        for skill in Skill::ALL {
            write!(out, "{:<13}", grade_for(student.effective(skill)))?;
        }
        write!(out, "{:>6.0}  ", student.stress)?;
        let mut notes: Vec<String> = Vec::new();
        if student.status == Status::Withdrawn {
            notes.push("withdrawn".to_owned());
        } else if let Some(tier) = student.honor {
            notes.push(tier.honor_title().to_owned());
        }
        notes.extend(student.traits.iter().map(|kind| trait_name(session, *kind)));
        writeln!(out, "{}", notes.join(", "))?;
    }

    if !session.journal.is_empty() {
        writeln!(out, "{THIN_RULE}")?;
        for entry in session.journal.iter() {
            writeln!(out, " {entry}")?;
        }
    }
    writeln!(out, "{RULE}")
}

/// Print this week's numbered menu.
pub fn render_menu(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "What will the club do this week?")?;
    for (number, entry) in (1..).zip(&session.menu) {
        write!(out, "  {number}. {}", entry.name())?;
        if let MenuEntry::Training(template) = entry {
            let mut details = vec![format!("cost {}", template.cost)];
            if template.fund_gain != 0 {
                details.push(format!("earns {}", template.fund_gain));
            }
            if let Some(allowed) = &template.weather {
                let skies: Vec<&str> = allowed.iter().map(|weather| weather.label()).collect();
                details.push(format!("needs {}", skies.join("/")));
            }
            if let Some(required) = template.required_trait {
                details.push(format!("needs a {}", trait_name(session, required)));
            }
            write!(out, " ({})", details.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the standings of a settled tier.
pub fn render_outcome(out: &mut impl Write, outcome: &ContestOutcome) -> io::Result<()> {
    if outcome.skipped {
        return writeln!(
            out,
            "  Nobody was eligible for the {}; it passes without us.",
            outcome.tier
        );
    }
    writeln!(out, "\n  {} results:", outcome.tier)?;
    if let Some(skill) = outcome.dropped_skill {
        writeln!(
            out,
            "  The weather ruined the {} round; it was not scored.",
            skill.label()
        )?;
    }
    for (rank, standing) in (1..).zip(&outcome.standings) {
        let verdict = if standing.promoted {
            outcome.tier.honor_title()
        } else {
            "eliminated"
        };
        let left = if standing.withdrew { ", then withdrew" } else { "" };
        writeln!(
            out,
            "  {rank:>2}. {:<16} {:>5.1}  {verdict}{left}",
            standing.name, standing.score
        )?;
    }
    Ok(())
}

/// Print the end-of-game report.
pub fn render_result(out: &mut impl Write, result: &SessionResult) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    match result.end_reason {
        EndReason::Victory => {
            writeln!(out, " Victory! The club won the International Olympiad.")?;
            writeln!(out, " Medalists: {}", result.champions.join(", "))?;
        }
        EndReason::HorizonReached => {
            writeln!(out, " Time is up. The club's coaching years are over.")?;
        }
        EndReason::AllWithdrawn => {
            writeln!(out, " Every student has left the club. Game over.")?;
        }
    }
    writeln!(
        out,
        " Weeks played: {} | Final year: {} | Funds: {} | Still active: {} | Withdrew: {}",
        result.ticks, result.final_year, result.funds, result.active, result.withdrawn
    )?;
    for (heading, totals) in [("Income", &result.income), ("Spending", &result.spending)] {
        let lines: Vec<String> = totals
            .iter()
            .map(|(kind, total)| format!("{kind:?} {total}"))
            .collect();
        if !lines.is_empty() {
            writeln!(out, " {heading}: {}", lines.join(", "))?;
        }
    }
    if !result.balanced {
        writeln!(out, " Warning: the club's books do not balance.")?;
    }
    writeln!(out, "{RULE}")
}
