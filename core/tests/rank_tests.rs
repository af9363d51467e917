use matchcore::factors::{language_match, skills_overlap};
use matchcore::{rank_matches, JobPosting, MatchResult, PostingStatus, TalentProfile, WEIGHTS};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn talent(skills: &[&str], languages: &[&str], readiness: i64) -> TalentProfile {
    TalentProfile {
        skills: strings(skills),
        languages: strings(languages),
        readiness_score: readiness,
        years_of_experience: 3,
    }
}

fn posting(id: &str, required: &[&str], location: Option<&str>) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        required_skills: strings(required),
        location: location.map(str::to_string),
        status: PostingStatus::Open,
    }
}

fn sap_talent() -> TalentProfile {
    talent(&["SAP FI", "Excel"], &["German"], 80)
}

fn mixed_catalog() -> Vec<JobPosting> {
    vec![
        posting("a", &["SAP FI", "SAP MM"], Some("Berlin")),
        posting("b", &[], Some("Remote")),
        posting("c", &["Go"], Some("Munich")),
        posting("d", &["excel"], None),
        posting("e", &["sap fi", "excel", "sql"], Some("German office, Vienna")),
        posting("f", &["SAP FI"], Some("")),
    ]
}

fn ids(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.job_id.as_str()).collect()
}

#[test]
fn partial_skills_onsite_posting() {
    let ranked = rank_matches(&sap_talent(), &[posting("a", &["SAP FI", "SAP MM"], Some("Berlin"))], 5);
    let r = &ranked[0];
    assert_eq!(r.breakdown.skills_overlap, 50);
    assert_eq!(r.breakdown.readiness, 80);
    assert_eq!(r.breakdown.language_match, 25);
    assert_eq!(r.score, 54);
}

#[test]
fn remote_posting_without_requirements_ranks_first() {
    let postings = vec![
        posting("a", &["SAP FI", "SAP MM"], Some("Berlin")),
        posting("b", &[], Some("Remote")),
    ];
    let ranked = rank_matches(&sap_talent(), &postings, 5);
    assert_eq!(ids(&ranked), vec!["b", "a"]);
    let b = &ranked[0];
    assert_eq!(b.breakdown.skills_overlap, 100);
    assert_eq!(b.breakdown.language_match, 100);
    assert_eq!(b.score, 94);
}

#[test]
fn zero_limit_returns_nothing() {
    assert!(rank_matches(&sap_talent(), &mixed_catalog(), 0).is_empty());
}

#[test]
fn equal_scores_order_by_id() {
    let profile = talent(&[], &[], 0);
    // skills 100, readiness 0, location 100 => 70
    let postings = vec![posting("job-b", &[], None), posting("job-a", &[], Some("remote"))];
    let ranked = rank_matches(&profile, &postings, 10);
    assert_eq!(ranked[0].score, 70);
    assert_eq!(ranked[1].score, 70);
    assert_eq!(ids(&ranked), vec!["job-a", "job-b"]);
}

#[test]
fn no_talent_skills_scores_zero_overlap() {
    let profile = talent(&[], &[], 50);
    assert_eq!(skills_overlap(&profile, &posting("g", &["Go"], None)), 0);
}

#[test]
fn every_score_is_in_range() {
    let profiles = vec![
        sap_talent(),
        talent(&[], &[], -40),
        talent(&["go", "rust"], &["english", "german"], 1000),
        talent(&["  "], &[""], 100),
    ];
    for profile in &profiles {
        for r in rank_matches(profile, &mixed_catalog(), 100) {
            assert!(r.score <= 100);
            assert!(r.breakdown.skills_overlap <= 100);
            assert!(r.breakdown.readiness <= 100);
            assert!(r.breakdown.language_match <= 100);
        }
    }
}

#[test]
fn score_equals_rounded_weighted_sum() {
    for r in rank_matches(&sap_talent(), &mixed_catalog(), 100) {
        let b = r.breakdown;
        let exact = (f64::from(WEIGHTS.skills) * f64::from(b.skills_overlap)
            + f64::from(WEIGHTS.readiness) * f64::from(b.readiness)
            + f64::from(WEIGHTS.language) * f64::from(b.language_match))
            / 100.0;
        assert!((f64::from(r.score) - exact).abs() <= 0.5, "{} vs {exact}", r.score);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let first = rank_matches(&sap_talent(), &mixed_catalog(), 4);
    let second = rank_matches(&sap_talent(), &mixed_catalog(), 4);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn input_order_does_not_change_output() {
    let forward = rank_matches(&sap_talent(), &mixed_catalog(), 100);
    let mut reversed_input = mixed_catalog();
    reversed_input.reverse();
    let backward = rank_matches(&sap_talent(), &reversed_input, 100);
    assert_eq!(forward, backward);
}

#[test]
fn possessed_skill_never_lowers_overlap() {
    let p = posting("m", &["rust", "go", "sql"], None);
    let mut profile = talent(&["rust"], &[], 0);
    let before = skills_overlap(&profile, &p);
    profile.skills.push("SQL".into());
    let after = skills_overlap(&profile, &p);
    assert!(after >= before);
    profile.skills.retain(|s| s != "rust");
    assert!(skills_overlap(&profile, &p) <= after);
}

#[test]
fn empty_requirements_always_full_overlap() {
    for profile in [sap_talent(), talent(&[], &[], 0)] {
        assert_eq!(skills_overlap(&profile, &posting("n", &[], Some("Paris"))), 100);
    }
}

#[test]
fn output_is_sorted() {
    let ranked = rank_matches(&sap_talent(), &mixed_catalog(), 100);
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score > b.score || (a.score == b.score && a.job_id < b.job_id));
    }
}

#[test]
fn truncation_length() {
    let catalog = mixed_catalog();
    for k in [-5i64, 0, 1, 3, 6, 7, 100] {
        let expected = (k.max(0) as usize).min(catalog.len());
        assert_eq!(rank_matches(&sap_talent(), &catalog, k).len(), expected);
    }
}

#[test]
fn remote_ignores_languages() {
    for languages in [&[][..], &["German"][..], &["japanese", "korean"][..]] {
        let profile = talent(&[], languages, 0);
        for loc in ["Remote", "REMOTE", "  remote "] {
            assert_eq!(language_match(&profile, &posting("r", &[], Some(loc))), 100);
        }
    }
}

#[test]
fn results_echo_each_posting_once() {
    let catalog = mixed_catalog();
    let ranked = rank_matches(&sap_talent(), &catalog, 100);
    let mut got: Vec<&str> = ids(&ranked);
    got.sort();
    let mut want: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    want.sort();
    assert_eq!(got, want);
}

#[test]
fn closed_postings_are_still_scored() {
    let mut closed = posting("z", &[], None);
    closed.status = PostingStatus::Closed;
    assert_eq!(rank_matches(&sap_talent(), &[closed], 1).len(), 1);
}
