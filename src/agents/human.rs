use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::game::MAX_TAKE;

use super::agent::MoveSource;

/// A human player that reads moves from a text interface.
///
/// Input is validated here: the entered value must be an integer in
/// `1..=min(3, pile)`, and the prompt repeats until one is given. The
/// engine's legality check stays a second, independent layer. A closed
/// input stream yields 0, which the engine treats as a forfeit.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<BufReader<Stdin>, Stdout> {
    pub fn from_stdio() -> Self {
        HumanAgent {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanAgent<R, W> {
    fn name(&self) -> &str {
        "Human"
    }

    fn play(&mut self, pile: u32) -> u32 {
        let max_take = MAX_TAKE.min(pile);

        loop {
            // Prompt failures are not worth ending a match over.
            let _ = writeln!(self.output, "There are {pile} sticks.");
            let _ = write!(
                self.output,
                "How many sticks would you like to take? (1-{max_take}) "
            );
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return 0, // input closed; forfeit
                Ok(_) => {}
            }

            match line.trim().parse::<u32>() {
                Ok(choice) if (1..=max_take).contains(&choice) => return choice,
                Ok(_) => {
                    let _ = writeln!(
                        self.output,
                        "Invalid choice. You must take between 1 and {max_take} sticks."
                    );
                }
                Err(_) => {
                    let _ = writeln!(self.output, "Please enter a number.");
                }
            }
        }
    }
}
