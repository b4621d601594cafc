//! Battle domain: the lunge-shake-return attack animation as a state object.

use bevy::prelude::*;
use rand::Rng;

use crate::content::AttackTuning;
use crate::tween::{Tween, random_in_circle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Attack,
    Hurt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttackPhase {
    Anticipation(Tween),
    Lunge(Tween),
    /// `interval` restarts after every shake
    Impact { shakes_done: u32, interval: Tween },
    Hold(Tween),
    Return(Tween),
    Done,
}

#[derive(Debug, Clone)]
pub struct AttackSequence {
    pub attacker: Side,
    pub phase: AttackPhase,
    attacker_home: Vec2,
    victim_home: Vec2,
    wind_up: Vec2,
    strike: Vec2,
    /// Victim position when the return starts
    victim_from: Vec2,
    pub attacker_pos: Vec2,
    pub victim_pos: Vec2,
    pub victim_tinted: bool,
    tuning: AttackTuning,
}

impl AttackSequence {
    pub fn new(attacker: Side, attacker_home: Vec2, victim_home: Vec2, tuning: &AttackTuning) -> Self {
        let direction = Vec2::new((victim_home.x - attacker_home.x).signum(), 0.0);
        let strike = victim_home - direction * tuning.strike_distance;
        let wind_up = attacker_home + (attacker_home - strike).normalize_or_zero() * tuning.wind_up_distance;

        Self {
            attacker,
            phase: AttackPhase::Anticipation(Tween::new(tuning.anticipation)),
            attacker_home,
            victim_home,
            wind_up,
            strike,
            victim_from: victim_home,
            attacker_pos: attacker_home,
            victim_pos: victim_home,
            victim_tinted: false,
            tuning: tuning.clone(),
        }
    }

    pub fn victim(&self) -> Side {
        match self.attacker {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == AttackPhase::Done
    }

    #[cfg(test)]
    pub fn strike_position(&self) -> Vec2 {
        self.strike
    }

    #[cfg(test)]
    pub fn wind_up_position(&self) -> Vec2 {
        self.wind_up
    }

    /// Pose for the fighter on `side` at this point of the sequence.
    pub fn pose(&self, side: Side) -> Pose {
        if self.is_finished() {
            return Pose::Idle;
        }
        if side == self.attacker {
            Pose::Attack
        } else if matches!(
            self.phase,
            AttackPhase::Impact { .. } | AttackPhase::Hold(_) | AttackPhase::Return(_)
        ) {
            Pose::Hurt
        } else {
            Pose::Idle
        }
    }

    pub fn position(&self, side: Side) -> Vec2 {
        if side == self.attacker {
            self.attacker_pos
        } else {
            self.victim_pos
        }
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl Rng) {
        match &mut self.phase {
            AttackPhase::Anticipation(tween) => {
                let p = tween.tick(delta);
                self.attacker_pos = self.attacker_home.lerp(self.wind_up, p);
                if tween.finished() {
                    self.phase = AttackPhase::Lunge(Tween::new(self.tuning.lunge));
                }
            }
            AttackPhase::Lunge(tween) => {
                let p = tween.tick(delta);
                self.attacker_pos = self.wind_up.lerp(self.strike, p);
                if tween.finished() {
                    self.attacker_pos = self.strike;
                    self.victim_tinted = true;
                    self.shake(rng);
                    self.phase = AttackPhase::Impact {
                        shakes_done: 1,
                        interval: Tween::new(self.tuning.shake_interval),
                    };
                }
            }
            AttackPhase::Impact {
                shakes_done,
                interval,
            } => {
                interval.tick(delta);
                if !interval.finished() {
                    return;
                }
                *interval = Tween::new(self.tuning.shake_interval);
                if *shakes_done >= self.tuning.shake_count {
                    self.phase = AttackPhase::Hold(Tween::new(self.tuning.hold));
                    return;
                }
                *shakes_done += 1;
                self.shake(rng);
            }
            AttackPhase::Hold(tween) => {
                tween.tick(delta);
                if tween.finished() {
                    self.victim_tinted = false;
                    self.victim_from = self.victim_pos;
                    self.phase = AttackPhase::Return(Tween::new(self.tuning.return_time));
                }
            }
            AttackPhase::Return(tween) => {
                let p = tween.tick(delta);
                self.attacker_pos = self.strike.lerp(self.attacker_home, p);
                self.victim_pos = self.victim_from.lerp(self.victim_home, p);
                if tween.finished() {
                    self.attacker_pos = self.attacker_home;
                    self.victim_pos = self.victim_home;
                    self.phase = AttackPhase::Done;
                }
            }
            AttackPhase::Done => {}
        }
    }

    fn shake(&mut self, rng: &mut impl Rng) {
        self.victim_pos = self.victim_home + random_in_circle(rng, self.tuning.shake_radius);
    }
}
