use chrono::{Local, NaiveDate};

/// Source of "today" for date arithmetic such as days-until-exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn fixed(date: NaiveDate) -> Self {
        Clock::Fixed(date)
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}
