//! 个人档案页：只读展示，数据来自会话中的学生档案

use portal_shared::Student;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileItem {
    pub label: &'static str,
    pub value: String,
}

pub fn profile_items(student: &Student) -> Vec<ProfileItem> {
    vec![
        ProfileItem {
            label: "Student ID",
            value: student.student_id.clone(),
        },
        ProfileItem {
            label: "Email",
            value: student.email.clone(),
        },
        ProfileItem {
            label: "Course",
            value: student.course.clone(),
        },
        ProfileItem {
            label: "Year & Section",
            value: format!("Year {} - Section {}", student.year, student.section),
        },
    ]
}

/// 头像上显示的首字母
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::student;

    #[test]
    fn items_in_display_order() {
        let items = profile_items(&student());
        let labels: Vec<_> = items.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Student ID", "Email", "Course", "Year & Section"]);
        assert_eq!(items[0].value, "2024-0001");
        assert_eq!(items[3].value, "Year 2 - Section B");
    }

    #[test]
    fn initial_is_first_letter() {
        assert_eq!(initial("ana Cruz"), "A");
        assert_eq!(initial("  "), "");
    }
}
