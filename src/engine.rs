use crate::model::{BudgetMode, MatchBet, Settings};

// Stakes are placed in multiples of 5 currency units.
const STAKE_STEP: f64 = 5.0;

#[derive(Clone, Copy, PartialEq)]
pub enum BudgetRatioRule {
    // Historical formula: scale the odds share of the total payout, then
    // divide by the budget. Kept as the default for output parity.
    AsWritten,
    // Unit-consistent variant: the odds share of the budget itself.
    BudgetShare,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct InvestmentAnalysis {
    pub actual_investment: f64,
    pub recommended_investment: f64,
    pub win_profit: f64,
    pub team1_loss_scenario: f64,
    pub team2_loss_scenario: f64,
}

pub fn parse_stake(s: &str) -> Option<f64> {
    let s = s.trim().replace(',', "");
    if s.is_empty() { return None; }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn payout(amount: f64, odds: f64) -> f64 {
    if !amount.is_finite() || !odds.is_finite() { return 0.0; }
    amount * odds
}

pub fn round_to_nearest_5(x: f64) -> f64 { (x / STAKE_STEP).round() * STAKE_STEP }

pub fn recommended_stake(odds: f64, other_odds: f64, settings: &Settings, total_payout: f64) -> f64 {
    recommended_stake_with(BudgetRatioRule::AsWritten, odds, other_odds, settings, total_payout)
}

pub fn recommended_stake_with(
    rule: BudgetRatioRule,
    odds: f64,
    other_odds: f64,
    settings: &Settings,
    total_payout: f64,
) -> f64 {
    if odds <= 0.0 || !odds.is_finite() { return 0.0; }
    let amount = match settings.mode() {
        BudgetMode::MaxBudget(budget) => {
            let sum = odds + other_odds;
            if sum <= 0.0 { return 0.0; }
            let share = odds / sum;
            match rule {
                BudgetRatioRule::AsWritten => total_payout * share / budget,
                BudgetRatioRule::BudgetShare => budget * share,
            }
        }
        BudgetMode::TargetPayout(target) => target / odds,
    };
    round_to_nearest_5(amount)
}

// Splits a fixed budget across both sides so the two payouts come out
// (approximately) equal, returning the rounded stake for the first side.
pub fn budget_split_stake(odds: f64, other_odds: f64, max_budget: f64) -> f64 {
    if odds <= 0.0 || other_odds <= 0.0 { return 0.0; }
    if !odds.is_finite() || !other_odds.is_finite() { return 0.0; }
    let ratio = odds / other_odds;
    let mut amount = max_budget * ratio / (1.0 + ratio);
    let other_amount = max_budget - amount;
    let pay = payout(amount, odds);
    let other_pay = payout(other_amount, other_odds);
    // Re-derive from the average payout when the ratio split misses by
    // more than one currency unit.
    if (pay - other_pay).abs() > 1.0 {
        let avg = (pay + other_pay) / 2.0;
        amount = avg / odds;
    }
    round_to_nearest_5(amount)
}

pub fn analyze_investment(bet: &MatchBet, settings: &Settings) -> InvestmentAnalysis {
    let amount1 = bet.team1_bet.bet_amount.unwrap_or(0.0);
    let amount2 = bet.team2_bet.bet_amount.unwrap_or(0.0);
    let odds1 = bet.team1_bet.odds.unwrap_or(0.0);
    let odds2 = bet.team2_bet.odds.unwrap_or(0.0);

    let actual_investment = amount1 + amount2;
    let payout1 = payout(amount1, odds1);
    let payout2 = payout(amount2, odds2);
    let total_payout = payout1 + payout2;

    let recommended_investment = recommended_stake(odds1, odds2, settings, total_payout)
        + recommended_stake(odds2, odds1, settings, total_payout);

    let win_profit = total_payout - actual_investment;

    // With only one side staked the whole investment rides unhedged.
    let single_sided = bet.team1_bet.bet_amount.is_none() || bet.team2_bet.bet_amount.is_none();
    let (team1_loss_scenario, team2_loss_scenario) = if single_sided {
        (-actual_investment, -actual_investment)
    } else {
        (payout2 - actual_investment, payout1 - actual_investment)
    };

    InvestmentAnalysis {
        actual_investment,
        recommended_investment,
        win_profit,
        team1_loss_scenario,
        team2_loss_scenario,
    }
}
