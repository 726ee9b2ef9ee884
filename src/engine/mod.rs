//! The round engine.
//!
//! One round runs `DealingInitial -> CheckingBlackjack -> PlayerTurn ->
//! DealerTurn -> Reveal -> Scoring`, then `AwaitingReplay` either resets the
//! session for another round or moves to `Ended`. A blackjack on the deal skips
//! both turns, and a busted player skips the dealer's turn.

use blackjack::rules::STARTING_HAND;
use blackjack::{settle, Card, Move, Outcome};

use crate::io::{
    parse_move, parse_name, wants_exit, wants_rules, Event, HandView, Input, Prompt, Screen,
};
use crate::participant::Seat;
use crate::state::{Phase, RoundResult, Session, Tally};
use crate::GameError;

pub struct Game<I: Input, D: Screen> {
    session: Session,
    input: I,
    screen: D,
}

impl<I: Input, D: Screen> Game<I, D> {
    pub fn new(session: Session, input: I, screen: D) -> Self {
        Self {
            session,
            input,
            screen,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn screen(&self) -> &D {
        &self.screen
    }

    pub fn into_parts(self) -> (Session, I, D) {
        (self.session, self.input, self.screen)
    }

    /// Welcome, registration, rounds until the player exits, farewell.
    pub fn play(&mut self) -> Result<Tally, GameError> {
        log::info!("Session started");
        self.welcome()?;
        self.register()?;

        loop {
            self.play_round()?;
            if !self.replay()? {
                break;
            }
        }

        let tally = self.session.tally();
        log::info!(
            "Session ended after {} rounds: {} {} - {} {}",
            self.session.rounds_played,
            tally.player,
            tally.player_score,
            tally.dealer,
            tally.dealer_score
        );
        self.screen.show(Event::Farewell(tally.clone()))?;
        Ok(tally)
    }

    /// Offer the rules; anything starting with `r` shows them.
    pub fn welcome(&mut self) -> Result<(), GameError> {
        let answer = self.input.read_line(Prompt::Welcome)?;
        if wants_rules(&answer) {
            self.screen.show(Event::Rules)?;
            self.input.read_line(Prompt::Continue)?;
        }
        Ok(())
    }

    /// Ask for the player's name until a non-blank one is typed.
    pub fn register(&mut self) -> Result<(), GameError> {
        let name = loop {
            let line = self.input.read_line(Prompt::Name)?;
            match parse_name(&line) {
                Ok(name) => break name,
                Err(GameError::EmptyName) => {
                    log::warn!("Rejected blank name");
                    self.screen.show(Event::InvalidName)?;
                }
                Err(e) => return Err(e),
            }
        };

        log::info!("Player {name} sits down against {}", self.session.dealer.name);
        self.session.player.name = name.clone();
        self.screen.show(Event::Introduced {
            player: name,
            dealer: self.session.dealer.name.clone(),
        })?;
        self.input.read_line(Prompt::Continue)?;
        Ok(())
    }

    /// Play one round from the initial deal to the score update.
    pub fn play_round(&mut self) -> Result<RoundResult, GameError> {
        self.deal_initial()?;

        if !self.check_blackjack()? {
            self.take_turn(Seat::Player)?;
            if self.session.player.is_busted() {
                log::debug!("{} busted, dealer turn skipped", self.session.player.name);
            } else {
                self.take_turn(Seat::Dealer)?;
            }
        }

        self.reveal()?;
        self.score()
    }

    /// Ask whether to go again. Returns `false` once the player exits.
    pub fn replay(&mut self) -> Result<bool, GameError> {
        self.session.phase = Phase::AwaitingReplay;
        let answer = self.input.read_line(Prompt::Replay)?;
        if wants_exit(&answer) {
            self.session.phase = Phase::Ended;
            return Ok(false);
        }

        self.session.reset_round();
        Ok(true)
    }

    fn deal_initial(&mut self) -> Result<(), GameError> {
        self.session.phase = Phase::DealingInitial;
        for seat in [Seat::Player, Seat::Dealer] {
            let cards = (0..STARTING_HAND)
                .map(|_| self.session.deck.deal())
                .collect::<Result<Vec<Card>, _>>()?;
            let participant = self.session.seat_mut(seat);
            participant.take_cards(cards);
            log::debug!(
                "Dealt starting hand to {}, total {}",
                participant.name,
                participant.total_value()
            );
        }
        Ok(())
    }

    fn deal_to(&mut self, seat: Seat) -> Result<Card, GameError> {
        let card = self.session.deck.deal()?;
        let participant = self.session.seat_mut(seat);
        participant.take(card);
        log::debug!(
            "Dealt {card} to {}, total {}",
            participant.name,
            participant.total_value()
        );
        Ok(card)
    }

    /// Returns `true` when a blackjack ends the round before anyone plays.
    fn check_blackjack(&mut self) -> Result<bool, GameError> {
        self.session.phase = Phase::CheckingBlackjack;
        if !self.session.someone_blackjack() {
            return Ok(false);
        }

        let player = self.session.player.is_blackjack();
        let dealer = self.session.dealer.is_blackjack();
        if player && dealer {
            self.screen.show(Event::Push)?;
        } else {
            for (seat, has_blackjack) in [(Seat::Player, player), (Seat::Dealer, dealer)] {
                if has_blackjack {
                    let name = self.session.seat(seat).name.clone();
                    self.screen.show(Event::Blackjack { seat, name })?;
                }
            }
        }

        Ok(true)
    }

    fn take_turn(&mut self, seat: Seat) -> Result<(), GameError> {
        self.session.phase = match seat {
            Seat::Player => Phase::PlayerTurn,
            Seat::Dealer => Phase::DealerTurn,
        };

        loop {
            if seat == Seat::Player {
                let dealer = HandView::of(&self.session.dealer, true);
                self.screen.show(Event::DealerHidden(dealer))?;
            }

            let choice = self.decide(seat)?;
            let participant = self.session.seat_mut(seat);
            participant.set_move(choice);
            let name = participant.name.clone();
            log::debug!("{name} chose {choice:?} on {}", participant.total_value());
            self.screen.show(Event::Moved { name, choice })?;

            if choice == Move::Stay {
                break;
            }

            self.deal_to(seat)?;
            if self.session.seat(seat).is_busted() {
                break;
            }
        }

        Ok(())
    }

    fn decide(&mut self, seat: Seat) -> Result<Move, GameError> {
        let participant = self.session.seat(seat);
        let automatic = participant.policy.automatic_move(participant.hand());
        self.screen.show(Event::Hand(HandView::of(participant, false)))?;

        if let Some(choice) = automatic {
            return Ok(choice);
        }

        loop {
            let line = self.input.read_line(Prompt::HitOrStay)?;
            match parse_move(&line) {
                Ok(choice) => return Ok(choice),
                Err(GameError::InvalidInput(raw)) => {
                    log::warn!("Rejected move {raw:?}");
                    self.screen.show(Event::InvalidMove)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn reveal(&mut self) -> Result<(), GameError> {
        self.session.phase = Phase::Reveal;
        self.screen.show(Event::Reveal {
            dealer: HandView::of(&self.session.dealer, false),
            player: HandView::of(&self.session.player, false),
            busted: self.session.anyone_busted(),
        })?;
        self.input.read_line(Prompt::Continue)?;
        Ok(())
    }

    fn score(&mut self) -> Result<RoundResult, GameError> {
        self.session.phase = Phase::Scoring;
        let outcome = settle(self.session.player.hand(), self.session.dealer.hand());
        match outcome {
            Outcome::PlayerWins => self.session.player.add_score(),
            Outcome::DealerWins => self.session.dealer.add_score(),
            Outcome::Tie | Outcome::Push | Outcome::BothBusted => {}
        }
        self.session.rounds_played += 1;

        let result = self.session.result(outcome);
        log::info!(
            "Round {} settled: {:?} ({} {} / {} {})",
            self.session.rounds_played,
            outcome,
            self.session.player.name,
            result.player_total,
            self.session.dealer.name,
            result.dealer_total
        );

        self.screen.show(Event::Settled {
            result,
            player: self.session.player.name.clone(),
            dealer: self.session.dealer.name.clone(),
        })?;
        self.screen.show(Event::Tally(self.session.tally()))?;
        Ok(result)
    }
}
