use crate::engine;

pub const TEAMS: &[&str] = &[
    "Chennai Super Kings",
    "Delhi Capitals",
    "Gujarat Titans",
    "Kolkata Knight Riders",
    "Lucknow Super Giants",
    "Mumbai Indians",
    "Punjab Kings",
    "Rajasthan Royals",
    "Royal Challengers Bengaluru",
    "Sunrisers Hyderabad",
];

#[derive(Clone, Copy, PartialEq)]
pub enum Side { Team1, Team2 }

// Exactly one budgeting mode is active at a time.
#[derive(Clone, Copy, PartialEq)]
pub enum BudgetMode {
    TargetPayout(f64),
    MaxBudget(f64),
}

#[derive(Clone, Copy, PartialEq)]
pub struct Settings {
    pub target_payout: f64,
    pub max_budget: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { target_payout: 2100.0, max_budget: 0.0 }
    }
}

impl Settings {
    // A positive budget wins; the target stays dormant until the budget
    // is cleared again.
    pub fn mode(&self) -> BudgetMode {
        if self.max_budget > 0.0 {
            BudgetMode::MaxBudget(self.max_budget)
        } else {
            BudgetMode::TargetPayout(self.target_payout)
        }
    }

    pub fn from_inputs(target_payout: f64, max_budget: f64) -> Self {
        if max_budget > 0.0 {
            Self { target_payout: 0.0, max_budget }
        } else {
            Self { target_payout, max_budget: 0.0 }
        }
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct TeamBet {
    pub odds: Option<f64>,
    pub bet_amount: Option<f64>,
    pub estimated_payout: f64,
    pub recommended_amount: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MatchId(pub u64);

#[derive(Clone, PartialEq)]
pub struct MatchBet {
    pub id: MatchId,
    pub team1: String,
    pub team2: String,
    pub team1_bet: TeamBet,
    pub team2_bet: TeamBet,
}

impl MatchBet {
    pub fn new(id: MatchId, team1: String, team2: String) -> Self {
        Self {
            id,
            team1,
            team2,
            team1_bet: TeamBet::default(),
            team2_bet: TeamBet::default(),
        }
    }

    pub fn bet(&self, side: Side) -> &TeamBet {
        match side { Side::Team1 => &self.team1_bet, Side::Team2 => &self.team2_bet }
    }

    fn bet_mut(&mut self, side: Side) -> &mut TeamBet {
        match side { Side::Team1 => &mut self.team1_bet, Side::Team2 => &mut self.team2_bet }
    }

    pub fn team_name(&self, side: Side) -> &str {
        match side { Side::Team1 => &self.team1, Side::Team2 => &self.team2 }
    }

    pub fn set_team_name(&mut self, side: Side, name: String) {
        match side { Side::Team1 => self.team1 = name, Side::Team2 => self.team2 = name }
    }

    // Editing odds abandons any typed stake for that side and re-derives
    // the recommendation; a changed odds value also shifts the split for
    // the opposite side, so both recommendations refresh.
    pub fn set_odds(&mut self, side: Side, odds: Option<f64>, settings: &Settings) {
        let bet = self.bet_mut(side);
        bet.odds = odds;
        bet.bet_amount = None;
        bet.estimated_payout = 0.0;
        self.recompute_recommended(settings);
    }

    // Typing a stake pins that side to the user's number; clearing it
    // hands the side back to the recommendation.
    pub fn set_bet_amount(&mut self, side: Side, amount: Option<f64>, settings: &Settings) {
        let bet = self.bet_mut(side);
        match amount {
            Some(a) => {
                bet.estimated_payout = engine::payout(a, bet.odds.unwrap_or(0.0));
                bet.bet_amount = Some(a);
                bet.recommended_amount = 0.0;
            }
            None => {
                bet.bet_amount = None;
                bet.estimated_payout = 0.0;
                self.recompute_recommended(settings);
            }
        }
    }

    pub fn recompute_recommended(&mut self, settings: &Settings) {
        for side in [Side::Team1, Side::Team2] {
            let rec = if self.bet(side).bet_amount.is_some() {
                0.0
            } else {
                self.recommended_for(side, settings)
            };
            self.bet_mut(side).recommended_amount = rec;
        }
    }

    fn recommended_for(&self, side: Side, settings: &Settings) -> f64 {
        let other = match side { Side::Team1 => Side::Team2, Side::Team2 => Side::Team1 };
        let odds = self.bet(side).odds.unwrap_or(0.0);
        let other_odds = self.bet(other).odds.unwrap_or(0.0);
        match settings.mode() {
            BudgetMode::MaxBudget(budget) => engine::budget_split_stake(odds, other_odds, budget),
            BudgetMode::TargetPayout(_) => engine::recommended_stake(odds, other_odds, settings, 0.0),
        }
    }
}

// Ordered match collection keyed by a stable, never-reused id, so row
// removal does not renumber the handlers still bound to other rows.
#[derive(Clone, PartialEq, Default)]
pub struct MatchList {
    entries: Vec<MatchBet>,
    next_id: u64,
}

impl MatchList {
    pub fn add(&mut self, team1: String, team2: String) -> MatchId {
        let id = MatchId(self.next_id);
        self.next_id += 1;
        self.entries.push(MatchBet::new(id, team1, team2));
        id
    }

    pub fn remove(&mut self, id: MatchId) {
        self.entries.retain(|m| m.id != id);
    }

    pub fn get(&self, id: MatchId) -> Option<&MatchBet> {
        self.entries.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut MatchBet> {
        self.entries.iter_mut().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchBet> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn recompute_recommended(&mut self, settings: &Settings) {
        for m in &mut self.entries {
            m.recompute_recommended(settings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample() -> MatchBet {
        MatchBet::new(MatchId(7), "Punjab Kings".into(), "Rajasthan Royals".into())
    }

    #[test]
    fn positive_budget_deactivates_target() {
        let s = Settings::from_inputs(2100.0, 500.0);
        assert_eq!(s.target_payout, 0.0);
        assert!(matches!(s.mode(), BudgetMode::MaxBudget(b) if (b - 500.0).abs() < EPS));

        let s = Settings::from_inputs(2100.0, 0.0);
        assert_eq!(s.max_budget, 0.0);
        assert!(matches!(s.mode(), BudgetMode::TargetPayout(t) if (t - 2100.0).abs() < EPS));
    }

    #[test]
    fn editing_odds_clears_stake_and_recomputes_recommendation() {
        let settings = Settings::default();
        let mut m = sample();
        m.set_odds(Side::Team1, Some(2.0), &settings);
        m.set_bet_amount(Side::Team1, Some(100.0), &settings);
        assert!((m.team1_bet.estimated_payout - 200.0).abs() < EPS);
        assert_eq!(m.team1_bet.recommended_amount, 0.0);

        m.set_odds(Side::Team1, Some(3.0), &settings);
        assert_eq!(m.team1_bet.bet_amount, None);
        assert_eq!(m.team1_bet.estimated_payout, 0.0);
        assert!((m.team1_bet.recommended_amount - 700.0).abs() < EPS);
    }

    #[test]
    fn entering_stake_computes_payout_and_zeroes_recommendation() {
        let settings = Settings::default();
        let mut m = sample();
        m.set_odds(Side::Team2, Some(2.5), &settings);
        assert!((m.team2_bet.recommended_amount - 840.0).abs() < EPS);

        m.set_bet_amount(Side::Team2, Some(80.0), &settings);
        assert!((m.team2_bet.estimated_payout - 200.0).abs() < EPS);
        assert_eq!(m.team2_bet.recommended_amount, 0.0);
    }

    #[test]
    fn clearing_stake_restores_recommendation_from_current_odds() {
        let settings = Settings::default();
        let mut m = sample();
        m.set_odds(Side::Team1, Some(2.0), &settings);
        m.set_bet_amount(Side::Team1, Some(100.0), &settings);
        m.set_bet_amount(Side::Team1, None, &settings);
        assert_eq!(m.team1_bet.estimated_payout, 0.0);
        assert!((m.team1_bet.recommended_amount - 1050.0).abs() < EPS);
    }

    #[test]
    fn budget_mode_recommends_the_split_stake() {
        let settings = Settings::from_inputs(0.0, 500.0);
        let mut m = sample();
        m.set_odds(Side::Team1, Some(2.0), &settings);
        m.set_odds(Side::Team2, Some(3.0), &settings);
        assert!((m.team1_bet.recommended_amount - 325.0).abs() < EPS);
        assert!((m.team2_bet.recommended_amount - 215.0).abs() < EPS);
    }

    #[test]
    fn stake_without_odds_still_tracks_but_pays_nothing() {
        let settings = Settings::default();
        let mut m = sample();
        m.set_bet_amount(Side::Team1, Some(100.0), &settings);
        assert_eq!(m.team1_bet.bet_amount, Some(100.0));
        assert_eq!(m.team1_bet.estimated_payout, 0.0);
    }

    #[test]
    fn match_ids_survive_removal() {
        let mut list = MatchList::default();
        let a = list.add("A1".into(), "A2".into());
        let b = list.add("B1".into(), "B2".into());
        let c = list.add("C1".into(), "C2".into());
        assert_ne!(a, b);

        list.remove(b);
        assert_eq!(list.len(), 2);
        assert!(list.get(b).is_none());
        assert_eq!(list.get(a).map(|m| m.team1.as_str()), Some("A1"));
        assert_eq!(list.get(c).map(|m| m.team1.as_str()), Some("C1"));

        // A fresh entry never reuses a removed id.
        let d = list.add("D1".into(), "D2".into());
        assert_ne!(d, b);
    }

    #[test]
    fn list_recompute_touches_every_match() {
        let settings = Settings::default();
        let mut list = MatchList::default();
        let a = list.add("A1".into(), "A2".into());
        let b = list.add("B1".into(), "B2".into());
        list.get_mut(a).unwrap().set_odds(Side::Team1, Some(2.0), &settings);
        list.get_mut(b).unwrap().set_odds(Side::Team1, Some(3.0), &settings);

        let updated = Settings::from_inputs(1000.0, 0.0);
        list.recompute_recommended(&updated);
        assert!((list.get(a).unwrap().team1_bet.recommended_amount - 500.0).abs() < EPS);
        assert!((list.get(b).unwrap().team1_bet.recommended_amount - 335.0).abs() < EPS);
    }
}
