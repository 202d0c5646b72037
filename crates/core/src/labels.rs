// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable group labels.

use crate::context::Locale;
use chrono::{Datelike, NaiveDate, Weekday};

/// Label for the group of undated open work.
#[must_use]
pub const fn backlog_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Sem data definida",
        Locale::EnUs => "No date set",
    }
}

/// Label for a date group, e.g. `Hoje - segunda-feira, 19 de outubro`.
///
/// Today and tomorrow get a relative prefix; other days show weekday and
/// date only.
#[must_use]
pub fn date_group_label(date: NaiveDate, today: NaiveDate, locale: Locale) -> String {
    let base: String = match locale {
        Locale::PtBr => format!(
            "{}, {} de {}",
            weekday_name(date.weekday(), locale),
            date.day(),
            month_name(date.month(), locale)
        ),
        Locale::EnUs => format!(
            "{}, {} {}",
            weekday_name(date.weekday(), locale),
            month_name(date.month(), locale),
            date.day()
        ),
    };

    let relative: Option<&str> = if date == today {
        Some(match locale {
            Locale::PtBr => "Hoje",
            Locale::EnUs => "Today",
        })
    } else if today.succ_opt() == Some(date) {
        Some(match locale {
            Locale::PtBr => "Amanhã",
            Locale::EnUs => "Tomorrow",
        })
    } else {
        None
    };

    match relative {
        Some(prefix) => format!("{prefix} - {base}"),
        None => base,
    }
}

const fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    match (locale, weekday) {
        (Locale::PtBr, Weekday::Mon) => "segunda-feira",
        (Locale::PtBr, Weekday::Tue) => "terça-feira",
        (Locale::PtBr, Weekday::Wed) => "quarta-feira",
        (Locale::PtBr, Weekday::Thu) => "quinta-feira",
        (Locale::PtBr, Weekday::Fri) => "sexta-feira",
        (Locale::PtBr, Weekday::Sat) => "sábado",
        (Locale::PtBr, Weekday::Sun) => "domingo",
        (Locale::EnUs, Weekday::Mon) => "Monday",
        (Locale::EnUs, Weekday::Tue) => "Tuesday",
        (Locale::EnUs, Weekday::Wed) => "Wednesday",
        (Locale::EnUs, Weekday::Thu) => "Thursday",
        (Locale::EnUs, Weekday::Fri) => "Friday",
        (Locale::EnUs, Weekday::Sat) => "Saturday",
        (Locale::EnUs, Weekday::Sun) => "Sunday",
    }
}

const fn month_name(month: u32, locale: Locale) -> &'static str {
    const PT: [&str; 12] = [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ];
    const EN: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    let index = (month.saturating_sub(1) % 12) as usize;
    match locale {
        Locale::PtBr => PT[index],
        Locale::EnUs => EN[index],
    }
}
