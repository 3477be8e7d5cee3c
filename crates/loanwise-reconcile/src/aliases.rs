//! Display labels used by input forms, mapped onto schema feature names.

/// One display label for a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub label: &'static str,
    pub feature: &'static str,
}

impl FieldAlias {
    pub const fn new(label: &'static str, feature: &'static str) -> Self {
        Self { label, feature }
    }
}

/// Labels the loan-approval forms have used for each column.
pub const LOAN_APPLICATION_ALIASES: &[FieldAlias] = &[
    FieldAlias::new("Marital Status", "Married"),
    FieldAlias::new("Self Employed", "Self_Employed"),
    FieldAlias::new("Applicant Income", "ApplicantIncome"),
    FieldAlias::new("Income", "ApplicantIncome"),
    FieldAlias::new("Coapplicant Income", "CoapplicantIncome"),
    FieldAlias::new("Loan Amount", "LoanAmount"),
    FieldAlias::new("Loan Term (months)", "Loan_Amount_Term"),
    FieldAlias::new("Loan Term", "Loan_Amount_Term"),
    FieldAlias::new("Loan Amount Term", "Loan_Amount_Term"),
    FieldAlias::new("Credit History", "Credit_History"),
    FieldAlias::new("Credit Score", "Credit_Score"),
    FieldAlias::new("Property Area", "Property_Area"),
];

/// Alias lookup. The first matching label in table order wins.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    aliases: &'static [FieldAlias],
}

impl AliasTable {
    pub const fn new(aliases: &'static [FieldAlias]) -> Self {
        Self { aliases }
    }

    pub const fn loan_application() -> Self {
        Self::new(LOAN_APPLICATION_ALIASES)
    }

    pub fn aliases(&self) -> &'static [FieldAlias] {
        self.aliases
    }

    /// Display labels for `feature`, in table order.
    pub fn labels_for<'a>(&'a self, feature: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.aliases
            .iter()
            .filter(move |a| a.feature == feature)
            .map(|a| a.label)
    }

    /// Schema name a display label stands for.
    pub fn feature_for(&self, label: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|a| a.label == label)
            .map(|a| a.feature)
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::loan_application()
    }
}
