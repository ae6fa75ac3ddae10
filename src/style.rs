use ratatui::style::{Color, Modifier, Style};
use time::{Date, Month};

/// Maps a date to the style the host should render its entry with.
pub trait DateStyler {
    fn date_style(&self, date: Date) -> MonthStyle;
}

/// The production [`DateStyler`]: every date styles as its civil month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthStyler;

impl DateStyler for MonthStyler {
    fn date_style(&self, date: Date) -> MonthStyle {
        MonthStyle::for_month(date.month())
    }
}

/// Colors and decoration for one calendar month.
///
/// `day_text` colors the large day-of-month numeral, `weekday_text` the
/// weekday label next to the decoration glyph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthStyle {
    pub background: Color,
    pub weekday_text: Color,
    pub day_text: Color,
    pub emoji: &'static str,
}

impl MonthStyle {
    /// Look up the style for a month.  The table is total: all twelve
    /// months are matched, with no default arm.
    pub fn for_month(month: Month) -> MonthStyle {
        match month {
            Month::January => JANUARY,
            Month::February => FEBRUARY,
            Month::March => MARCH,
            Month::April => APRIL,
            Month::May => MAY,
            Month::June => JUNE,
            Month::July => JULY,
            Month::August => AUGUST,
            Month::September => SEPTEMBER,
            Month::October => OCTOBER,
            Month::November => NOVEMBER,
            Month::December => DECEMBER,
        }
    }

    pub fn weekday_style(&self) -> Style {
        Style::new()
            .fg(self.weekday_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn day_style(&self) -> Style {
        Style::new()
            .fg(self.day_text)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }
}

const JANUARY: MonthStyle = MonthStyle {
    background: Color::Rgb(156, 163, 175),
    weekday_text: Color::Rgb(31, 41, 55),
    day_text: Color::Rgb(243, 244, 246),
    emoji: "⛄️",
};

const FEBRUARY: MonthStyle = MonthStyle {
    background: Color::Rgb(254, 205, 211),
    weekday_text: Color::Rgb(80, 7, 36),
    day_text: Color::Rgb(190, 18, 60),
    emoji: "❤️",
};

const MARCH: MonthStyle = MonthStyle {
    background: Color::Rgb(187, 247, 208),
    weekday_text: Color::Rgb(20, 83, 45),
    day_text: Color::Rgb(22, 101, 52),
    emoji: "☘️",
};

const APRIL: MonthStyle = MonthStyle {
    background: Color::Rgb(191, 219, 254),
    weekday_text: Color::Rgb(30, 58, 138),
    day_text: Color::Rgb(37, 99, 235),
    emoji: "🌧️",
};

const MAY: MonthStyle = MonthStyle {
    background: Color::Rgb(254, 240, 138),
    weekday_text: Color::Rgb(113, 63, 18),
    day_text: Color::Rgb(202, 138, 4),
    emoji: "🌺",
};

const JUNE: MonthStyle = MonthStyle {
    background: Color::Rgb(186, 230, 253),
    weekday_text: Color::Rgb(12, 74, 110),
    day_text: Color::Rgb(2, 132, 199),
    emoji: "🌤️",
};

const JULY: MonthStyle = MonthStyle {
    background: Color::Rgb(147, 197, 253),
    weekday_text: Color::Rgb(23, 37, 84),
    day_text: Color::Rgb(29, 78, 216),
    emoji: "🏖️",
};

const AUGUST: MonthStyle = MonthStyle {
    background: Color::Rgb(254, 215, 170),
    weekday_text: Color::Rgb(124, 45, 18),
    day_text: Color::Rgb(234, 88, 12),
    emoji: "☀️",
};

const SEPTEMBER: MonthStyle = MonthStyle {
    background: Color::Rgb(254, 202, 202),
    weekday_text: Color::Rgb(69, 10, 10),
    day_text: Color::Rgb(185, 28, 28),
    emoji: "🍁",
};

const OCTOBER: MonthStyle = MonthStyle {
    background: Color::Rgb(23, 23, 23),
    weekday_text: Color::Rgb(249, 115, 22),
    day_text: Color::Rgb(250, 250, 250),
    emoji: "🎃",
};

const NOVEMBER: MonthStyle = MonthStyle {
    background: Color::Rgb(217, 180, 143),
    weekday_text: Color::Rgb(69, 26, 3),
    day_text: Color::Rgb(154, 52, 18),
    emoji: "🦃",
};

const DECEMBER: MonthStyle = MonthStyle {
    background: Color::Rgb(254, 226, 226),
    weekday_text: Color::Rgb(22, 101, 52),
    day_text: Color::Rgb(220, 38, 38),
    emoji: "🎄",
};
