use std::io::{BufRead, Write};

use anyhow::Result;
use sweeper_core::{CellIndex, Game, GameError, write_grid};

pub const CHOICE_PROMPT: &str = "Choose an index: ";
pub const LOSE_MESSAGE: &str = "YOU LOSE!";
pub const WIN_MESSAGE: &str = "YOU WIN!";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    /// Input ran out before the game finished.
    Abandoned,
}

/// Prompts for indices until the game is won or lost, then shows the whole board.
pub fn run(game: &mut Game, input: impl BufRead, output: &mut impl Write) -> Result<SessionEnd> {
    let mut lines = input.lines();

    while !game.state().is_finished() {
        writeln!(output, "{game}")?;
        write!(output, "{CHOICE_PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            log::info!("Input closed before the game ended");
            return Ok(SessionEnd::Abandoned);
        };
        let line = line?;
        let choice = line.trim();

        let index: CellIndex = match choice.parse() {
            Ok(index) => index,
            Err(err) => {
                writeln!(output, "Not a cell index: {choice:?} ({err})")?;
                continue;
            }
        };

        match game.disclose(index) {
            Ok(outcome) if !outcome.has_update() => log::info!("Cell {index} is already disclosed"),
            Ok(outcome) => log::debug!("Disclosed {index}: {outcome:?}"),
            Err(err @ GameError::IndexOutOfRange { .. }) => writeln!(output, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }

    let end = if game.is_lost() {
        writeln!(output, "{LOSE_MESSAGE}")?;
        SessionEnd::Lost
    } else {
        writeln!(output, "{WIN_MESSAGE}")?;
        SessionEnd::Won
    };

    let mut solution = String::new();
    write_grid(&mut solution, &game.render_solution())?;
    writeln!(output, "{solution}")?;
    Ok(end)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use sweeper_core::{Grid, HazardLayout};

    use super::*;

    // _ _ _
    // _ 1 1
    // _ 1 *
    fn corner_game() -> Game {
        let layout = HazardLayout::from_hazard_indices(Grid::new(3).unwrap(), [8]).unwrap();
        Game::with_layout(layout)
    }

    fn play(game: &mut Game, input: &str) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = run(game, Cursor::new(input), &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win_in_one_move() {
        let mut game = corner_game();
        let (end, output) = play(&mut game, "0\n");

        assert_eq!(end, SessionEnd::Won);
        assert!(output.starts_with("# # #\n# # #\n# # #\nChoose an index: "));
        assert!(output.ends_with("YOU WIN!\n_ _ _\n_ 1 1\n_ 1 *\n"));
    }

    #[test]
    fn lose_on_hazard() {
        let mut game = corner_game();
        let (end, output) = play(&mut game, "4\n8\n");

        assert_eq!(end, SessionEnd::Lost);
        assert!(output.contains("# # #\n# 1 #\n# # #\n"));
        assert!(output.contains(LOSE_MESSAGE));
        assert!(game.is_lost());
    }

    #[test]
    fn bad_input_is_reported_and_reprompted() {
        let mut game = corner_game();
        let (end, output) = play(&mut game, "abc\n42\n  0  \n");

        assert_eq!(end, SessionEnd::Won);
        assert!(output.contains("Not a cell index: \"abc\""));
        assert!(output.contains("Cell index 42 out of range, board has 9 cells"));
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 3);
    }

    #[test]
    fn repeated_choice_is_ignored() {
        let mut game = corner_game();
        let (end, output) = play(&mut game, "4\n4\n0\n");

        assert_eq!(end, SessionEnd::Won);
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 3);
        assert_eq!(output.matches("# # #\n# 1 #\n# # #\n").count(), 2);
    }

    #[test]
    fn closed_input_abandons() {
        let mut game = corner_game();
        let (end, output) = play(&mut game, "4\n");

        assert_eq!(end, SessionEnd::Abandoned);
        assert!(!output.contains(WIN_MESSAGE));
        assert_eq!(game.disclosed_count(), 1);
    }
}
