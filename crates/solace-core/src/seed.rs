//! Default records used when a collection is missing or unreadable.

use jiff::civil::date;

use crate::id::EntityId;
use crate::models::assessment::{Assessment, Question};
use crate::models::inquiry::{Inquiry, InquiryStatus};
use crate::models::resource::{Resource, ResourceStatus, ResourceType};
use crate::models::user::{User, UserRole, UserStatus};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn assessments() -> Vec<Assessment> {
    vec![
        Assessment {
            id: EntityId(1_709_251_200_000),
            user_name: "Priya Sharma".to_string(),
            category: "Anxiety".to_string(),
            date: date(2024, 3, 1),
            score: 68,
            duration: 15,
            recommendations: strings(&[
                "Practice box breathing twice a day",
                "Schedule a follow-up with a counsellor",
            ]),
            issues: strings(&["Difficulty sleeping", "Racing thoughts"]),
            questions: vec![
                Question {
                    text: "How often do you feel nervous or on edge?".to_string(),
                    options: strings(&[
                        "Not at all",
                        "Several days",
                        "More than half the days",
                        "Nearly every day",
                    ]),
                },
                Question {
                    text: "How often do you find it hard to stop worrying?".to_string(),
                    options: strings(&[
                        "Not at all",
                        "Several days",
                        "More than half the days",
                        "Nearly every day",
                    ]),
                },
            ],
            min_age: 18,
            max_age: 60,
            active: true,
        },
        Assessment {
            id: EntityId(1_709_942_400_000),
            user_name: "Rahul Verma".to_string(),
            category: "Stress".to_string(),
            date: date(2024, 3, 9),
            score: 42,
            duration: 10,
            recommendations: strings(&["Take short breaks during work hours"]),
            issues: strings(&["Work pressure"]),
            questions: vec![Question {
                text: "How often have you felt overwhelmed this month?".to_string(),
                options: strings(&["Never", "Sometimes", "Often", "Always"]),
            }],
            min_age: 16,
            max_age: 65,
            active: true,
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: EntityId(1_710_000_000_000),
            title: "5 Breathing Techniques for Anxiety Relief".to_string(),
            author: "Dr. Sarah Johnson".to_string(),
            kind: ResourceType::Article,
            category: "Anxiety".to_string(),
            platform: "Web".to_string(),
            age: "18-35".to_string(),
            status: ResourceStatus::Live,
            tags: strings(&["anxiety", "breathing", "self-care"]),
            thumbnail: None,
            publish_date: date(2024, 3, 10),
            views: 1250,
            likes: 89,
        },
        Resource {
            id: EntityId(1_710_086_400_000),
            title: "Guided Sleep Meditation".to_string(),
            author: "Michael Chen".to_string(),
            kind: ResourceType::Video,
            category: "Sleep".to_string(),
            platform: "YouTube".to_string(),
            age: "All ages".to_string(),
            status: ResourceStatus::Draft,
            tags: strings(&["sleep", "meditation"]),
            thumbnail: None,
            publish_date: date(2024, 3, 11),
            views: 0,
            likes: 0,
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: EntityId(1_704_067_200_000),
            first_name: "Anita".to_string(),
            last_name: "Desai".to_string(),
            name: None,
            email: "anita.desai@example.com".to_string(),
            role: UserRole::SuperAdmin,
            profile_pic: None,
            phone: Some("+91 98200 00001".to_string()),
            expertise: None,
            experience: None,
            education: None,
            age: Some(38),
            assessment_name: None,
            join_date: Some(date(2024, 1, 1)),
            status: UserStatus::Active,
        },
        User {
            id: EntityId(1_706_745_600_000),
            first_name: "Kabir".to_string(),
            last_name: "Mehta".to_string(),
            name: None,
            email: "kabir.mehta@example.com".to_string(),
            role: UserRole::Counsellor,
            profile_pic: None,
            phone: None,
            expertise: Some("Cognitive behavioural therapy".to_string()),
            experience: Some("8 years".to_string()),
            education: Some("M.Phil. Clinical Psychology".to_string()),
            age: Some(34),
            assessment_name: Some("Anxiety Screening".to_string()),
            join_date: Some(date(2024, 2, 1)),
            status: UserStatus::Active,
        },
    ]
}

pub fn inquiries() -> Vec<Inquiry> {
    vec![Inquiry {
        id: EntityId(1_711_929_600_000),
        name: "Meera Iyer".to_string(),
        email: "meera.iyer@example.com".to_string(),
        phone: "+91 98200 00042".to_string(),
        message: "I would like to book a session for my teenage son.".to_string(),
        enquiry_type: "counselling".to_string(),
        status: InquiryStatus::Pending,
        created_at: jiff::Timestamp::from_millisecond(1_711_929_600_000).ok(),
    }]
}
