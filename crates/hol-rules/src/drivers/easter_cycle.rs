//! Easter-cycle feasts shared by the Christian and several country rule sets.

use hol_core::errors::Result;

use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

/// A movable feast at a fixed offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feast {
    /// Shrove Tuesday / Carnival, Easter − 47.
    Carnival,
    /// Ash Wednesday, Easter − 46.
    AshWednesday,
    /// Palm Sunday, Easter − 7.
    PalmSunday,
    /// Maundy Thursday, Easter − 3.
    MaundyThursday,
    /// Good Friday, Easter − 2.
    GoodFriday,
    /// Holy Saturday, Easter − 1.
    HolySaturday,
    /// Easter Sunday.
    Easter,
    /// Easter Monday, Easter + 1.
    EasterMonday,
    /// Ascension Day, Easter + 39.
    Ascension,
    /// Whitsun (Pentecost), Easter + 49.
    Whitsun,
    /// Whit Monday, Easter + 50.
    WhitMonday,
    /// Corpus Christi, Easter + 60.
    CorpusChristi,
}

impl Feast {
    /// Every feast, in calendar order.
    pub const ALL: [Feast; 12] = [
        Feast::Carnival,
        Feast::AshWednesday,
        Feast::PalmSunday,
        Feast::MaundyThursday,
        Feast::GoodFriday,
        Feast::HolySaturday,
        Feast::Easter,
        Feast::EasterMonday,
        Feast::Ascension,
        Feast::Whitsun,
        Feast::WhitMonday,
        Feast::CorpusChristi,
    ];

    /// Days from Easter Sunday.
    pub fn offset(&self) -> i32 {
        match self {
            Feast::Carnival => -47,
            Feast::AshWednesday => -46,
            Feast::PalmSunday => -7,
            Feast::MaundyThursday => -3,
            Feast::GoodFriday => -2,
            Feast::HolySaturday => -1,
            Feast::Easter => 0,
            Feast::EasterMonday => 1,
            Feast::Ascension => 39,
            Feast::Whitsun => 49,
            Feast::WhitMonday => 50,
            Feast::CorpusChristi => 60,
        }
    }

    /// Key suffix; the full key is `prefix + key`.
    pub fn key(&self) -> &'static str {
        match self {
            Feast::Carnival => "carnival",
            Feast::AshWednesday => "ashWednesday",
            Feast::PalmSunday => "palmSunday",
            Feast::MaundyThursday => "maundyThursday",
            Feast::GoodFriday => "goodFriday",
            Feast::HolySaturday => "easterSaturday",
            Feast::Easter => "easter",
            Feast::EasterMonday => "easterMonday",
            Feast::Ascension => "ascensionDay",
            Feast::Whitsun => "whitsun",
            Feast::WhitMonday => "whitMonday",
            Feast::CorpusChristi => "corpusChristi",
        }
    }

    /// Default English title.
    pub fn title(&self) -> &'static str {
        match self {
            Feast::Carnival => "Carnival",
            Feast::AshWednesday => "Ash Wednesday",
            Feast::PalmSunday => "Palm Sunday",
            Feast::MaundyThursday => "Maundy Thursday",
            Feast::GoodFriday => "Good Friday",
            Feast::HolySaturday => "Easter Saturday",
            Feast::Easter => "Easter Sunday",
            Feast::EasterMonday => "Easter Monday",
            Feast::Ascension => "Ascension Day",
            Feast::Whitsun => "Whitsun",
            Feast::WhitMonday => "Whit Monday",
            Feast::CorpusChristi => "Corpus Christi",
        }
    }
}

/// Parameterised base emitting a selection of [`Feast`]s under
/// `prefix + feast key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterCycle {
    prefix: &'static str,
    feasts: &'static [Feast],
}

impl EasterCycle {
    /// Cycle emitting `feasts` with keys prefixed by `prefix`.
    pub const fn new(prefix: &'static str, feasts: &'static [Feast]) -> Self {
        Self { prefix, feasts }
    }

    /// Key prefix.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Feasts this cycle emits.
    pub fn feasts(&self) -> &'static [Feast] {
        self.feasts
    }

    /// Full key of `feast` under this cycle's prefix.
    pub fn key(&self, feast: Feast) -> String {
        format!("{}{}", self.prefix, feast.key())
    }
}

impl RuleSet for EasterCycle {
    fn name(&self) -> &str {
        "Easter cycle"
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        let easter = ctx.easter()?;
        for feast in self.feasts {
            set.add(self.key(*feast), easter.add_days(feast.offset())?, feast.title());
        }
        Ok(())
    }
}
