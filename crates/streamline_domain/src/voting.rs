//! Voters, ballots and electoral districts.
//!
//! Eligibility is a plain `age >= legal age` check and district membership
//! is an elector-id prefix match.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use streamline_foundation::{Container, ContainerKind};
use streamline_pipeline::{Pipeline, PipelineConfig, filter};

/// A person who may or may not be old enough to vote.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Creates a person.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }
}

/// A voter on the electoral register, identified by elector id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegisteredVoter {
    elector_id: String,
}

impl RegisteredVoter {
    /// Creates a registered voter.
    #[must_use]
    pub fn new(elector_id: impl Into<String>) -> Self {
        Self {
            elector_id: elector_id.into(),
        }
    }

    /// Returns the elector id, e.g. `HA7654`.
    #[must_use]
    pub fn elector_id(&self) -> &str {
        &self.elector_id
    }
}

/// Parties standing for election.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Party {
    /// Conservative.
    Conservative,
    /// Labour.
    Labour,
    /// Liberal Democrats.
    LiberalDemocrats,
    /// Green Party.
    GreenParty,
    /// Monster Raving Loony Party.
    MonsterRavingLoonyParty,
}

/// A cast ballot: a vote for one party, or spoiled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ballot {
    party: Option<Party>,
}

impl Ballot {
    /// A valid vote for `party`.
    #[must_use]
    pub const fn vote_for(party: Party) -> Self {
        Self { party: Some(party) }
    }

    /// A spoiled ballot.
    #[must_use]
    pub const fn spoiled() -> Self {
        Self { party: None }
    }

    /// Returns true if this ballot counts for no party.
    #[must_use]
    pub const fn is_spoiled(&self) -> bool {
        self.party.is_none()
    }

    /// Returns the party voted for.
    #[must_use]
    pub const fn party(&self) -> Option<Party> {
        self.party
    }
}

/// Electoral districts and their elector-id prefixes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElectoralDistrict {
    /// Croydon (`CR`).
    Croydon,
    /// Barking (`BA`).
    Barking,
    /// Hackney (`HA`).
    Hackney,
    /// Edmonton (`ED`).
    Edmonton,
}

impl ElectoralDistrict {
    /// Every district.
    pub const ALL: [Self; 4] = [Self::Croydon, Self::Barking, Self::Hackney, Self::Edmonton];

    /// Returns the prefix shared by elector ids registered here.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Croydon => "CR",
            Self::Barking => "BA",
            Self::Hackney => "HA",
            Self::Edmonton => "ED",
        }
    }

    /// Returns true if `voter` is registered in this district.
    #[must_use]
    pub fn registers(self, voter: &RegisteredVoter) -> bool {
        voter.elector_id().starts_with(self.prefix())
    }
}

/// Rules deciding who may vote.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VotingRules {
    /// Minimum age, inclusive.
    pub legal_voting_age: u32,
}

impl Default for VotingRules {
    fn default() -> Self {
        Self {
            legal_voting_age: 18,
        }
    }
}

impl VotingRules {
    /// Creates rules with the given legal voting age.
    #[must_use]
    pub const fn new(legal_voting_age: u32) -> Self {
        Self { legal_voting_age }
    }

    /// Returns the people old enough to vote under these rules.
    #[must_use]
    pub fn eligible_voters(&self, potential_voters: &[Person]) -> Vec<Person> {
        eligible_voters(potential_voters, self.legal_voting_age)
    }
}

/// Returns the people aged at least `legal_age_of_voting`, in source order.
///
/// `potential_voters` is left untouched.
#[must_use]
pub fn eligible_voters(potential_voters: &[Person], legal_age_of_voting: u32) -> Vec<Person> {
    filter(potential_voters, |p| p.age() >= legal_age_of_voting)
}

/// Returns the voters registered in `district` as a read-only set.
#[must_use]
pub fn voters_in(district: ElectoralDistrict, voters: &[RegisteredVoter]) -> Container<RegisteredVoter> {
    let config = PipelineConfig::default().with_label(format!("voters in {}", district.prefix()));
    Pipeline::with_config(voters, config)
        .filter(|v| district.registers(v))
        .collect(ContainerKind::ImmutableUniqueSet)
}

/// Returns the ballots that count for a party.
///
/// Ballots carry no identity beyond their party, so two votes for the same
/// party are two equal values; both are kept.
#[must_use]
pub fn unspoiled_ballots(ballots: &[Ballot]) -> Vec<Ballot> {
    filter(ballots, |b| !b.is_spoiled())
}
