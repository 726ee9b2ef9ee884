//! Line-based terminal front end.
//!
//! The engine wants separate `Input` and `Screen` values, but both talk to the
//! same screen, so `Terminal` is a cheap shared handle around one `Console`.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use blackjack::rules::STARTING_HAND;
use blackjack::{Move, Outcome};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use twentyone::{Event, GameError, HandView, Input, Prompt, RoundResult, Screen, Seat, Tally};

use crate::art;
use crate::config::Config;

/// Columns reserved per card when centring banners.
const CARD_COLUMNS: usize = 18;

/// Pad `text` to `width` with `fill`; odd padding goes on the right.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let run = |n: usize| std::iter::repeat(fill).take(n).collect::<String>();
    format!("{}{}{}", run(left), text, run(pad - left))
}

pub struct Console<R, W> {
    reader: R,
    out: W,
    rules: String,
    pause: Duration,
    long_pause: Duration,
    clear_screen: bool,
    name_len: usize,
    widest_hand: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W, config: &Config, rules: String) -> Self {
        Self {
            reader,
            out,
            rules,
            pause: config.pause,
            long_pause: config.long_pause,
            clear_screen: config.clear_screen,
            name_len: 0,
            widest_hand: STARTING_HAND,
        }
    }

    fn width(&self) -> usize {
        CARD_COLUMNS * self.widest_hand + self.name_len
    }

    fn centered(&mut self, text: &str, fill: char) -> Result<(), GameError> {
        let line = center(text, self.width(), fill);
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), GameError> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn wait(&mut self, duration: Duration) -> Result<(), GameError> {
        writeln!(self.out, "...Loading....")?;
        self.out.flush()?;
        if !duration.is_zero() {
            thread::sleep(duration);
        }
        Ok(())
    }

    fn lines(&mut self, lines: &[String]) -> Result<(), GameError> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: Prompt) -> Result<(), GameError> {
        match prompt {
            Prompt::Welcome => {
                writeln!(self.out, "Hello! Welcome to Twenty-One!")?;
                writeln!(self.out, "Would you like to review the rules before you play?")?;
                writeln!(self.out, "Please input 'r' for review")?;
                writeln!(self.out, "OR \n'Enter' to continue to the game!")?;
            }
            Prompt::Name => writeln!(self.out, "What is your name?")?,
            Prompt::HitOrStay => {
                writeln!(self.out, "Would you like to hit or stay?")?;
                writeln!(self.out, "Enter 'h'/'1' to Hit or 's'/'2' to Stay")?;
            }
            Prompt::Continue => writeln!(self.out, "Press 'Enter' to continue.")?,
            Prompt::Replay => {
                self.centered("Would you like to play again?", ' ')?;
                self.centered("Press 'Enter' to go again", ' ')?;
                self.centered("Enter 'e'/'3' to exit", ' ')?;
                writeln!(self.out)?;
                self.centered(":", ':')?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn read(&mut self, prompt: Prompt) -> Result<String, GameError> {
        self.ask(prompt)?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            log::warn!("Input closed while waiting for {prompt:?}");
            return Err(GameError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn hidden_hand(&mut self, view: &HandView) -> Result<(), GameError> {
        self.clear()?;
        writeln!(self.out, "{} has {} cards.", view.name, view.cards.len())?;
        self.lines(&art::hidden_hand(&view.cards))?;
        Ok(())
    }

    fn hand(&mut self, view: &HandView) -> Result<(), GameError> {
        match view.seat {
            Seat::Player => {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "{}, you have the following {} cards:\n",
                    view.name,
                    view.cards.len()
                )?;
            }
            Seat::Dealer => {
                if view.cards.len() == STARTING_HAND {
                    self.wait(self.pause)?;
                }
                self.clear()?;
                writeln!(self.out, "The Dealer, {}'s Cards:", view.name)?;
            }
        }
        self.lines(&art::hand(&view.cards))?;
        writeln!(self.out)?;
        writeln!(self.out, "Current Total Value: {}", view.total)?;
        if view.seat == Seat::Dealer {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn reveal(
        &mut self,
        dealer: &HandView,
        player: &HandView,
        busted: bool,
    ) -> Result<(), GameError> {
        self.widest_hand = dealer.cards.len().max(player.cards.len());
        self.clear()?;
        writeln!(self.out)?;

        self.centered(" DEALER'S CARDS ", '=')?;
        self.lines(&art::hand(&dealer.cards))?;
        writeln!(self.out)?;
        self.centered(&format!(" [Total value is: {}] ", dealer.total), '=')?;
        writeln!(self.out)?;

        if busted {
            self.centered(" BUSTED! ", ' ')?;
        } else {
            self.centered(" CARD REVEAL ", ' ')?;
        }
        writeln!(self.out)?;

        self.centered(" PLAYER'S CARDS ", '=')?;
        self.lines(&art::hand(&player.cards))?;
        writeln!(self.out)?;
        self.centered(&format!(" [Total value is: {}] ", player.total), '=')?;
        writeln!(self.out)?;
        Ok(())
    }

    fn settled(
        &mut self,
        result: &RoundResult,
        player: &str,
        dealer: &str,
    ) -> Result<(), GameError> {
        self.clear()?;
        self.centered(":", ':')?;
        let verdict = match result.outcome {
            Outcome::PlayerWins => format!("{player}, you WIN!"),
            Outcome::DealerWins => format!("{dealer} WINS"),
            Outcome::Tie => "Its a TIE!".to_string(),
            Outcome::Push => "PUSH!".to_string(),
            Outcome::BothBusted => "Everyone busted!".to_string(),
        };
        self.centered(&verdict, ' ')?;

        if result.player_busted {
            self.centered(&format!("{player}, you busted!"), ' ')?;
        }
        if result.dealer_busted {
            self.centered(&format!("{dealer} busted."), ' ')?;
        }
        self.centered(&format!("{dealer}'s total value is: {}", result.dealer_total), ' ')?;
        self.centered(&format!("{player}'s total value is: {}", result.player_total), ' ')?;
        writeln!(self.out)?;
        Ok(())
    }

    fn tally(&mut self, tally: &Tally) -> Result<(), GameError> {
        self.centered(" Game Score ", ' ')?;
        writeln!(self.out)?;
        let line = format!(
            " {} [ {} ] : {} [ {} ] ",
            tally.dealer, tally.dealer_score, tally.player, tally.player_score
        );
        self.centered(&line, ':')?;
        writeln!(self.out)?;
        Ok(())
    }

    fn render(&mut self, event: Event) -> Result<(), GameError> {
        match event {
            Event::Rules => {
                self.clear()?;
                write!(self.out, "{}", self.rules)?;
                writeln!(self.out)?;
            }
            Event::Introduced { player, dealer } => {
                self.name_len = player.chars().count();
                writeln!(self.out, "Welcome, {player}!")?;
                writeln!(self.out, "Your dealer for today: {dealer}")?;
            }
            Event::InvalidName => {
                writeln!(self.out, "That is not a valid name. Please try again.")?;
            }
            Event::DealerHidden(view) => self.hidden_hand(&view)?,
            Event::Hand(view) => self.hand(&view)?,
            Event::InvalidMove => {
                writeln!(
                    self.out,
                    "That is not a valid response, please enter 'h'/'1' or 's'/'2'!"
                )?;
            }
            Event::Moved { name, choice } => {
                match choice {
                    Move::Hit => writeln!(self.out, "{name} HITS!")?,
                    Move::Stay => writeln!(self.out, "{name} STAYS!")?,
                }
                self.wait(self.pause)?;
            }
            Event::Blackjack { seat, name } => {
                self.clear()?;
                match seat {
                    Seat::Player => writeln!(self.out, "{name}, YOU HAVE BLACKJACK!")?,
                    Seat::Dealer => writeln!(self.out, "Dealer has Blackjack")?,
                }
                self.wait(self.long_pause)?;
            }
            Event::Push => {
                self.clear()?;
                writeln!(self.out, "PUSH!")?;
                self.wait(self.long_pause)?;
            }
            Event::Reveal {
                dealer,
                player,
                busted,
            } => self.reveal(&dealer, &player, busted)?,
            Event::Settled { result, player, dealer } => self.settled(&result, &player, &dealer)?,
            Event::Tally(tally) => self.tally(&tally)?,
            Event::Farewell(tally) => {
                self.clear()?;
                self.centered(":", ':')?;
                writeln!(self.out, " ")?;
                self.centered(" Final ", ' ')?;
                self.tally(&tally)?;
                self.centered(" Thanks for playing! ", ' ')?;
                writeln!(self.out, " ")?;
                self.centered(":", ':')?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Shared handle that serves as both the engine's `Input` and its `Screen`.
pub struct Terminal<R, W>(Rc<RefCell<Console<R, W>>>);

impl<R, W> Clone for Terminal<R, W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self(Rc::new(RefCell::new(console)))
    }
}

impl<R: BufRead, W: Write> Input for Terminal<R, W> {
    fn read_line(&mut self, prompt: Prompt) -> Result<String, GameError> {
        self.0.borrow_mut().read(prompt)
    }
}

impl<R: BufRead, W: Write> Screen for Terminal<R, W> {
    fn show(&mut self, event: Event) -> Result<(), GameError> {
        self.0.borrow_mut().render(event)
    }
}

#[cfg(test)]
impl<R> Terminal<R, Vec<u8>> {
    fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow().out).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{Card, Deck, Rank, Suit};
    use std::io::Cursor;
    use twentyone::{Game, Participant, Session};

    fn quiet() -> Config {
        Config {
            pause: Duration::ZERO,
            long_pause: Duration::ZERO,
            clear_screen: false,
            ..Config::default()
        }
    }

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        let reader = Cursor::new(input.as_bytes().to_vec());
        Terminal::new(Console::new(reader, Vec::new(), &quiet(), "RULES TEXT".to_string()))
    }

    #[test]
    fn test_center_puts_odd_padding_right() {
        assert_eq!(center("abc", 6, '*'), "*abc**");
        assert_eq!(center("ab", 6, '='), "==ab==");
        assert_eq!(center("toolong", 3, ' '), "toolong");
        assert_eq!(center(":", 5, ':'), ":::::");
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut term = terminal("grace\r\n  h \n");
        assert_eq!(term.read_line(Prompt::Name).unwrap(), "grace");
        assert_eq!(term.read_line(Prompt::HitOrStay).unwrap(), "  h ");
        let out = term.output();
        assert!(out.contains("What is your name?"));
        assert!(out.contains("Enter 'h'/'1' to Hit or 's'/'2' to Stay"));
    }

    #[test]
    fn test_read_line_reports_closed_input() {
        let mut term = terminal("");
        assert!(matches!(
            term.read_line(Prompt::Continue),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn test_banners_use_name_and_hand_width() {
        let mut term = terminal("");
        term.show(Event::Introduced {
            player: "Ada".to_string(),
            dealer: "Hal".to_string(),
        })
        .unwrap();
        term.show(Event::Tally(Tally {
            player: "Ada".to_string(),
            player_score: 2,
            dealer: "Hal".to_string(),
            dealer_score: 1,
        }))
        .unwrap();

        let out = term.output();
        assert!(out.contains("Welcome, Ada!\nYour dealer for today: Hal\n"));
        // 18 * 2 cards + 3 letters
        let score = center(" Hal [ 1 ] : Ada [ 2 ] ", 39, ':');
        assert!(out.contains(&score), "{out}");
        assert_eq!(score.len(), 39);
    }

    #[test]
    fn test_moves_announce_and_pause() {
        let mut term = terminal("");
        term.show(Event::Moved {
            name: "Ada".to_string(),
            choice: Move::Hit,
        })
        .unwrap();
        term.show(Event::Moved {
            name: "Hal".to_string(),
            choice: Move::Stay,
        })
        .unwrap();
        assert_eq!(
            term.output(),
            "Ada HITS!\n...Loading....\nHal STAYS!\n...Loading....\n"
        );
    }

    #[test]
    fn test_reveal_banner_follows_bust_flag() {
        let view = |seat, name: &str, cards: Vec<Card>, total| HandView {
            seat,
            name: name.to_string(),
            cards,
            total,
            hidden: false,
        };
        let dealer = view(
            Seat::Dealer,
            "Hal",
            vec![Card::new(Rank::Nine, Suit::Clubs), Card::new(Rank::Seven, Suit::Hearts)],
            16,
        );
        let player = view(
            Seat::Player,
            "Ada",
            vec![
                Card::new(Rank::King, Suit::Spades),
                Card::new(Rank::Five, Suit::Hearts),
                Card::new(Rank::Eight, Suit::Diamonds),
            ],
            23,
        );

        let mut term = terminal("");
        term.show(Event::Reveal {
            dealer: dealer.clone(),
            player: player.clone(),
            busted: true,
        })
        .unwrap();
        let out = term.output();
        assert!(out.contains(" BUSTED! "));
        assert!(!out.contains(" CARD REVEAL "));
        assert!(out.contains(" [Total value is: 23] "));

        let mut term = terminal("");
        term.show(Event::Reveal {
            dealer,
            player,
            busted: false,
        })
        .unwrap();
        assert!(term.output().contains(" CARD REVEAL "));
    }

    #[test]
    fn test_full_round_through_terminal() {
        let term = terminal("r\n\n\ngrace\n\n s\ns\n\ne\n");
        let deck = Deck::stacked(vec![
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Three, Suit::Hearts),
        ]);
        let session = Session::new(deck, Participant::player(""), Participant::dealer("Sonny"));
        let mut game = Game::new(session, term.clone(), term.clone());

        let tally = game.play().unwrap();
        assert_eq!(tally.player, "Grace");
        assert_eq!(tally.player_score, 1);

        let out = term.output();
        for expected in [
            "Hello! Welcome to Twenty-One!",
            "RULES TEXT",
            "That is not a valid name. Please try again.",
            "Welcome, Grace!",
            "Sonny has 2 cards.",
            "[HIDDEN]",
            "Grace, you have the following 2 cards:",
            "Current Total Value: 18",
            "That is not a valid response, please enter 'h'/'1' or 's'/'2'!",
            "Grace STAYS!",
            "The Dealer, Sonny's Cards:",
            "Current Total Value: 14",
            "Sonny HITS!",
            "Current Total Value: 17",
            "Sonny STAYS!",
            " DEALER'S CARDS ",
            " [Total value is: 17] ",
            " CARD REVEAL ",
            " [Total value is: 18] ",
            "Press 'Enter' to continue.",
            "Grace, you WIN!",
            "Sonny's total value is: 17",
            "Grace's total value is: 18",
            " Sonny [ 0 ] : Grace [ 1 ] ",
            "Would you like to play again?",
            " Final ",
            " Thanks for playing! ",
        ] {
            assert!(out.contains(expected), "missing {expected:?} in\n{out}");
        }
        assert!(!out.contains("BUSTED!"));
    }
}
