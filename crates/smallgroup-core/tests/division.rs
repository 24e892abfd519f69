use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallgroup_core::division::{group_count, imbalance, scorer};
use smallgroup_core::{
    DivisionError, FaithStatus, Gender, GroupDivisionService, Member, PartitionOptimizer, Role,
    TargetSize,
};

fn member(id: i64, gender: Gender, faith_status: FaithStatus, role: Role) -> Member {
    Member {
        id,
        surname: format!("Surname{}", id),
        given_name: format!("GivenName{}", id),
        gender,
        faith_status,
        role,
        education_status: None,
        prep_attended: false,
        active: true,
    }
}

fn random_roster(rng: &mut StdRng, n: usize) -> Vec<Member> {
    (0..n)
        .map(|i| {
            let gender = Gender::ALL[rng.gen_range(0..Gender::ALL.len())];
            let faith = FaithStatus::ALL[rng.gen_range(0..FaithStatus::ALL.len())];
            let role = Role::ALL[rng.gen_range(0..Role::ALL.len())];
            member(i as i64, gender, faith, role)
        })
        .collect()
}

fn size(n: usize) -> TargetSize {
    TargetSize::new(n).expect("positive size")
}

#[test]
fn test_partition_preserves_members_exactly() {
    let optimizer = PartitionOptimizer::default();
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(0..40);
        let target = rng.gen_range(1..=10);
        let roster = random_roster(&mut rng, n);

        let partition = optimizer.optimize(&roster, size(target), &mut rng);

        let mut seen: HashMap<i64, usize> = HashMap::new();
        for group in &partition.groups {
            for m in &group.members {
                *seen.entry(m.id).or_default() += 1;
            }
        }
        assert_eq!(seen.len(), roster.len(), "seed {seed}: member lost");
        assert!(seen.values().all(|&count| count == 1), "seed {seed}: member duplicated");
    }
}

#[test]
fn test_group_sizes_differ_by_at_most_one() {
    let optimizer = PartitionOptimizer::default();
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let target = rng.gen_range(1..=10);
        let n = rng.gen_range(target..60);
        let roster = random_roster(&mut rng, n);

        let partition = optimizer.optimize(&roster, size(target), &mut rng);
        let sizes: Vec<usize> = partition.groups.iter().map(|g| g.size()).collect();
        let max = sizes.iter().copied().max().unwrap_or(0);
        let min = sizes.iter().copied().min().unwrap_or(0);

        assert_eq!(partition.len(), group_count(n, size(target)));
        assert!(max - min <= 1, "seed {seed}: sizes {sizes:?}");
    }
}

#[test]
fn test_fewer_members_than_target_yields_one_group() {
    let mut rng = StdRng::seed_from_u64(7);
    let roster = random_roster(&mut rng, 3);
    let partition = PartitionOptimizer::default().optimize(&roster, size(8), &mut rng);

    assert_eq!(partition.len(), 1);
    assert_eq!(partition.groups[0].size(), 3);
    assert!((partition.groups[0].score() - scorer::score(&roster)).abs() < 1e-12);
}

#[test]
fn test_five_members_target_four_is_one_group() {
    let mut rng = StdRng::seed_from_u64(1);
    let roster = random_roster(&mut rng, 5);
    let partition = PartitionOptimizer::default().optimize(&roster, size(4), &mut rng);

    assert_eq!(partition.len(), 1);
    assert_eq!(partition.groups[0].size(), 5);
}

#[test]
fn test_no_members_yields_no_groups() {
    let mut rng = StdRng::seed_from_u64(1);
    let partition = PartitionOptimizer::default().optimize(&[], size(4), &mut rng);
    assert!(partition.is_empty());
}

#[test]
fn test_score_trace_strictly_increases() {
    let optimizer = PartitionOptimizer::default();
    for seed in 0..25u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let roster = random_roster(&mut rng, 30);
        let partition = optimizer.optimize(&roster, size(5), &mut rng);

        assert!(partition.converged, "seed {seed}: did not converge");
        assert!(
            partition.score_trace.windows(2).all(|w| w[1] > w[0]),
            "seed {seed}: trace {:?}",
            partition.score_trace
        );
        let last = partition.score_trace.last().copied().unwrap_or_default();
        assert!((last - partition.total_score()).abs() < 1e-9);
    }
}

#[test]
fn test_result_is_a_local_optimum() {
    let mut rng = StdRng::seed_from_u64(99);
    let roster = random_roster(&mut rng, 18);
    let partition = PartitionOptimizer::default().optimize(&roster, size(6), &mut rng);
    let total = partition.total_score();

    // No single cross-group swap improves the total
    for a in 0..partition.len() {
        for b in (a + 1)..partition.len() {
            for i in 0..partition.groups[a].size() {
                for j in 0..partition.groups[b].size() {
                    let mut left = partition.groups[a].members.clone();
                    let mut right = partition.groups[b].members.clone();
                    std::mem::swap(&mut left[i], &mut right[j]);
                    let swapped = total - partition.groups[a].score() - partition.groups[b].score()
                        + scorer::score(&left)
                        + scorer::score(&right);
                    assert!(swapped <= total + 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_two_camps_are_mixed() {
    let roster: Vec<Member> = (0..8)
        .map(|i| {
            if i < 4 {
                member(i, Gender::Male, FaithStatus::Baptized, Role::Counselor)
            } else {
                member(i, Gender::Female, FaithStatus::Seeker, Role::Regular)
            }
        })
        .collect();

    for seed in 0..10u64 {
        let division = GroupDivisionService::default()
            .with_seed(seed)
            .divide(&roster, 4)
            .expect("valid size");

        assert_eq!(division.groups.len(), 2);
        for group in &division.groups {
            let men = group.members.iter().filter(|m| m.gender == Gender::Male).count();
            let baptized_counselors = group
                .members
                .iter()
                .filter(|m| m.faith_status == FaithStatus::Baptized && m.role == Role::Counselor)
                .count();
            assert_eq!(men, 2);
            assert_eq!(baptized_counselors, 2);
            assert!(!group.imbalanced);
        }
    }
}

#[test]
fn test_imbalance_examples() {
    let one_three: Vec<Member> = [Gender::Male, Gender::Female, Gender::Female, Gender::Female]
        .iter()
        .enumerate()
        .map(|(i, &g)| member(i as i64, g, FaithStatus::Unknown, Role::Regular))
        .collect();
    let two_two: Vec<Member> = [Gender::Male, Gender::Male, Gender::Female, Gender::Female]
        .iter()
        .enumerate()
        .map(|(i, &g)| member(i as i64, g, FaithStatus::Unknown, Role::Regular))
        .collect();

    assert!(imbalance::flag(&one_three));
    assert!(!imbalance::flag(&two_two));
}

#[test]
fn test_zero_target_size_is_rejected() {
    let mut rng = StdRng::seed_from_u64(3);
    let roster = random_roster(&mut rng, 10);
    let result = GroupDivisionService::default().divide(&roster, 0);
    assert!(matches!(result, Err(DivisionError::InvalidTargetSize(_))));
}

#[test]
fn test_export_matches_groups() {
    let mut rng = StdRng::seed_from_u64(12);
    let roster = random_roster(&mut rng, 11);
    let division = GroupDivisionService::default()
        .with_seed(12)
        .divide(&roster, 4)
        .expect("valid size");

    let mut expected = String::new();
    for (i, group) in division.groups.iter().enumerate() {
        if i > 0 {
            expected.push('\n');
        }
        expected.push_str(&format!("### Group {} ({} people)\n", i + 1, group.size));
        for m in &group.members {
            expected.push_str(&format!("- {} {} ({})\n", m.surname, m.given_name, m.gender));
        }
    }
    assert_eq!(division.export_text, expected);
}

#[test]
fn test_export_header_for_single_member_groups() {
    let roster = vec![
        member(1, Gender::Female, FaithStatus::Seeker, Role::Regular),
        member(2, Gender::Male, FaithStatus::Believer, Role::Facilitator),
    ];
    let division = GroupDivisionService::default()
        .with_seed(3)
        .divide(&roster, 1)
        .expect("valid size");

    assert_eq!(division.groups.len(), 2);
    for (i, group) in division.groups.iter().enumerate() {
        let m = &group.members[0];
        let section = format!(
            "### Group {} (1 people)\n- {} {} ({})\n",
            i + 1,
            m.surname,
            m.given_name,
            m.gender
        );
        assert!(division.export_text.contains(&section));
    }

    let alone = GroupDivisionService::default()
        .divide(&roster[..1], 5)
        .expect("valid size");
    assert_eq!(alone.export_text, "### Group 1 (1 people)\n- Surname1 GivenName1 (F)\n");
}
