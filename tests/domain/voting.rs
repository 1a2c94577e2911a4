//! Integration tests for voter eligibility, registers and ballots

use streamline_domain::voting::{eligible_voters, unspoiled_ballots, voters_in};
use streamline_domain::{Ballot, ElectoralDistrict, Party, Person, RegisteredVoter, VotingRules};
use streamline_foundation::{ContainerKind, ErrorKind};

#[test]
fn tom_dick_and_harry() {
    let people = vec![
        Person::new("Tom", 24),
        Person::new("Dick", 75),
        Person::new("Harry", 17),
    ];
    let eligible = eligible_voters(&people, 18);
    let names: Vec<&str> = eligible.iter().map(Person::name).collect();
    assert_eq!(names, vec!["Tom", "Dick"]);
    assert_eq!(people[2].name(), "Harry");
}

#[test]
fn configurable_voting_age() {
    let people = vec![Person::new("Ann", 16), Person::new("Bob", 15)];
    assert!(VotingRules::default().eligible_voters(&people).is_empty());
    assert_eq!(VotingRules::new(16).eligible_voters(&people).len(), 1);
}

#[test]
fn hackney_register() {
    let register: Vec<RegisteredVoter> =
        ["CR2345", "HA7654", "HA2213", "BA9987", "CR6203", "ED9876"]
            .into_iter()
            .map(RegisteredVoter::new)
            .collect();

    let mut hackney = voters_in(ElectoralDistrict::Hackney, &register);
    assert_eq!(hackney.len(), 2);
    assert!(hackney.contains(&RegisteredVoter::new("HA7654")));
    assert!(hackney.contains(&RegisteredVoter::new("HA2213")));
    assert_eq!(hackney.kind(), ContainerKind::ImmutableUniqueSet);

    let err = hackney.remove(&RegisteredVoter::new("HA7654")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ImmutableViolation { .. }));
    assert_eq!(hackney.len(), 2);
}

#[test]
fn duplicate_registration_collapses() {
    let register = vec![RegisteredVoter::new("ED1"), RegisteredVoter::new("ED1")];
    assert_eq!(voters_in(ElectoralDistrict::Edmonton, &register).len(), 1);
}

#[test]
fn six_of_eight_ballots_count() {
    let ballots = vec![
        Ballot::vote_for(Party::Labour),
        Ballot::vote_for(Party::Conservative),
        Ballot::spoiled(),
        Ballot::vote_for(Party::GreenParty),
        Ballot::vote_for(Party::LiberalDemocrats),
        Ballot::spoiled(),
        Ballot::vote_for(Party::MonsterRavingLoonyParty),
        Ballot::vote_for(Party::GreenParty),
    ];
    let counted = unspoiled_ballots(&ballots);
    assert_eq!(counted.len(), 6);
    assert_eq!(counted[0].party(), Some(Party::Labour));
    assert!(counted.iter().all(|b| !b.is_spoiled()));
}
