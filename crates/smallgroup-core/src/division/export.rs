//! Plain-text export of a division for copy/paste.
//!
//! ```text
//! ### Group 1 (4 people)
//! - Zhang San (M)
//! - Li Si (F)
//! ...
//!
//! ### Group 2 (3 people)
//! ...
//! ```
//!
//! Consumers parse and diff this, so the header and bullet shapes are fixed.

use std::fmt::Write;

use crate::division::GroupView;

fn header(group: &GroupView) -> String {
    format!("### Group {} ({} people)", group.number, group.size)
}

/// Render groups in the order given, one section each, separated by a blank line.
pub fn render(groups: &[GroupView]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}", header(group));
        for member in &group.members {
            let _ = writeln!(out, "- {} ({})", member.display_name(), member.gender.code());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FaithStatus, Gender, Member, Role};

    fn member(id: i64, surname: &str, given_name: &str, gender: Gender) -> Member {
        Member {
            id,
            surname: surname.to_string(),
            given_name: given_name.to_string(),
            gender,
            faith_status: FaithStatus::Believer,
            role: Role::Regular,
            education_status: None,
            prep_attended: false,
            active: true,
        }
    }

    fn view(number: usize, members: Vec<Member>) -> GroupView {
        GroupView {
            number,
            size: members.len(),
            members,
            score: 0.0,
            imbalanced: false,
            leader_count: 0,
            has_facilitator: false,
        }
    }

    #[test]
    fn test_render_format() {
        let groups = vec![
            view(
                1,
                vec![
                    member(1, "Zhang", "San", Gender::Male),
                    member(2, "Li", "Si", Gender::Female),
                ],
            ),
            view(2, vec![member(3, "Wang", "Wu", Gender::Male)]),
        ];

        let expected = "### Group 1 (2 people)\n\
                        - Zhang San (M)\n\
                        - Li Si (F)\n\
                        \n\
                        ### Group 2 (1 people)\n\
                        - Wang Wu (M)\n";
        assert_eq!(render(&groups), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }
}
