use serde::{Deserialize, Serialize};

const AMOUNT_PLACEHOLDER: &str = "{amount}";
const CURRENCY_PLACEHOLDER: &str = "{currency}";

/// User-facing message templates.
///
/// Templates may reference `{amount}` and, for cash messages, `{currency}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub cash_remaining: String,
    pub cash_exhausted: String,
    pub cash_debt: String,
    pub calories_remaining: String,
    pub calories_exhausted: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            cash_remaining: "today remaining {amount} {currency}".into(),
            cash_exhausted: "no money left, hang in there".into(),
            cash_debt: "no money left, hang in there: your debt is {amount} {currency}".into(),
            calories_remaining:
                "you may still eat something today, but no more than {amount} kcal total".into(),
            calories_exhausted: "enough eating!".into(),
        }
    }
}

impl Messages {
    pub fn russian() -> Self {
        Self {
            cash_remaining: "На сегодня осталось {amount} {currency}".into(),
            cash_exhausted: "Денег нет, держись".into(),
            cash_debt: "Денег нет, держись: твой долг - {amount} {currency}".into(),
            calories_remaining: "Сегодня можно съесть что-нибудь ещё, но с общей \
                                 калорийностью не более {amount} кКал"
                .into(),
            calories_exhausted: "Хватит есть!".into(),
        }
    }
}

/// Substitutes the amount and currency placeholders of `template`.
pub fn render(template: &str, amount: &str, currency: &str) -> String {
    template
        .replace(AMOUNT_PLACEHOLDER, amount)
        .replace(CURRENCY_PLACEHOLDER, currency)
}
