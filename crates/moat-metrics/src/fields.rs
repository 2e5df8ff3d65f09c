//! Statement fields read by the metrics engine.
//!
//! Every input the engine touches is named here and validated up front,
//! so a renamed or absent provider field surfaces as a `MissingField`
//! error instead of a silently misaligned lookup.

/// Income statement fields.
pub mod income {
    /// Gross profit
    pub const GROSS_PROFIT: &str = "grossProfit";
    /// Total revenue
    pub const TOTAL_REVENUE: &str = "totalRevenue";
    /// Operating income
    pub const OPERATING_INCOME: &str = "operatingIncome";
    /// Depreciation and amortization (income statement presentation)
    pub const DEPRECIATION_AND_AMORTIZATION: &str = "depreciationAndAmortization";
}

/// Balance sheet fields.
pub mod balance {
    /// Total assets
    pub const TOTAL_ASSETS: &str = "totalAssets";
    /// Intangible assets
    pub const INTANGIBLE_ASSETS: &str = "intangibleAssets";
    /// Goodwill
    pub const GOODWILL: &str = "goodwill";
    /// Cash and cash equivalents at carrying value
    pub const CASH_AND_EQUIVALENTS: &str = "cashAndCashEquivalentsAtCarryingValue";
}

/// Cash flow statement fields.
pub mod cash {
    /// Net cash provided by operating activities
    pub const OPERATING_CASHFLOW: &str = "operatingCashflow";
    /// Capital expenditures
    pub const CAPITAL_EXPENDITURES: &str = "capitalExpenditures";
    /// Depreciation, depletion and amortization (cash flow presentation)
    pub const DEPRECIATION_DEPLETION_AND_AMORTIZATION: &str =
        "depreciationDepletionAndAmortization";
    /// Change in operating assets
    pub const CHANGE_IN_OPERATING_ASSETS: &str = "changeInOperatingAssets";
    /// Change in operating liabilities
    pub const CHANGE_IN_OPERATING_LIABILITIES: &str = "changeInOperatingLiabilities";
}

/// Required income statement columns.
pub const INCOME_FIELDS: [&str; 4] = [
    income::GROSS_PROFIT,
    income::TOTAL_REVENUE,
    income::OPERATING_INCOME,
    income::DEPRECIATION_AND_AMORTIZATION,
];

/// Required balance sheet columns.
pub const BALANCE_FIELDS: [&str; 4] = [
    balance::TOTAL_ASSETS,
    balance::INTANGIBLE_ASSETS,
    balance::GOODWILL,
    balance::CASH_AND_EQUIVALENTS,
];

/// Required cash flow columns.
pub const CASH_FIELDS: [&str; 5] = [
    cash::OPERATING_CASHFLOW,
    cash::CAPITAL_EXPENDITURES,
    cash::DEPRECIATION_DEPLETION_AND_AMORTIZATION,
    cash::CHANGE_IN_OPERATING_ASSETS,
    cash::CHANGE_IN_OPERATING_LIABILITIES,
];
