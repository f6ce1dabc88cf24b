//! Console front end: y/n prompts and round narration.

use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::game::{Decider, Decision, Player};
use crate::hand::Score;
use crate::result::RoundResult;

/// Prompt shown before every hit/stand answer.
pub const HIT_PROMPT: &str = "Do you want to hit? (y/n): ";

/// Asks until the answer starts with `y` or `n`.
///
/// End of input counts as standing, so a closed console still finishes the
/// round.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn prompt_decision<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Decision>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input closed, standing");
            return Ok(Decision::Stand);
        }

        if let Some(decision) = Decision::parse(&line) {
            return Ok(decision);
        }
        log::debug!("rejected answer {:?}", line.trim());
    }
}

/// A [`Decider`] that narrates the round on `output` and asks `input`.
#[derive(Debug)]
pub struct ConsoleDecider<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDecider<R, W> {
    /// Creates a decider reading answers from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints the final totals and the verdict for every player.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing the report.
    pub fn report(&mut self, result: &RoundResult) -> io::Result<()> {
        writeln!(self.output)?;
        for player in &result.players {
            writeln!(
                self.output,
                "{}'s total card value = {}",
                player.name, player.score.total
            )?;
        }
        writeln!(self.output, "Dealer's total card value = {}", result.dealer.total)?;

        if let [player] = result.players.as_slice() {
            writeln!(self.output, "{}", player.outcome)?;
        } else {
            for player in &result.players {
                writeln!(self.output, "{}: {}", player.name, player.outcome)?;
            }
        }
        self.output.flush()
    }

    /// Returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Decider for ConsoleDecider<R, W> {
    fn decide(&mut self, player: &Player, _dealer: &Player) -> Decision {
        let prompt = format!("{}: {HIT_PROMPT}", player.name());
        match prompt_decision(&mut self.input, &mut self.output, &prompt) {
            Ok(decision) => decision,
            Err(err) => {
                log::warn!("console error, standing: {err}");
                Decision::Stand
            }
        }
    }

    fn card_dealt(&mut self, player: &Player, card: Card, score: Score) {
        let bust = if score.is_bust() { ", bust" } else { "" };
        if let Err(err) = writeln!(
            self.output,
            "{} draws {card}, score: {}{bust}",
            player.name(),
            score.total()
        ) {
            log::warn!("console error while narrating: {err}");
        }
    }
}
