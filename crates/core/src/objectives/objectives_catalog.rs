//! Static objective data: the standard per-booking plan, the auto-generated
//! set for managed artists, the reusable template catalog, and the fixed
//! per-type dollar weights used for ROI estimation.

use chrono::{Duration, Utc};

use crate::objectives::objectives_model::{
    NewObjective, ObjectiveStatus, ObjectiveTemplate, ObjectiveType, Priority, TemplateObjective,
};

// Staff professionals referenced by the standard plan.
const STAFF_PHOTOGRAPHER: i64 = 25;
const STAFF_SOCIAL_MEDIA_SPECIALIST: i64 = 26;
const STAFF_VIDEOGRAPHER: i64 = 27;

fn plan_objective(
    booking_id: i64,
    created_by: i64,
    objective_type: ObjectiveType,
    title: &str,
    description: &str,
    priority: Priority,
    deadline_days: Option<i64>,
    assigned_to: Option<i64>,
    tags: &[&str],
    related_professionals: &[i64],
) -> NewObjective {
    NewObjective {
        booking_id,
        objective_type,
        title: title.to_string(),
        description: description.to_string(),
        priority,
        status: ObjectiveStatus::Planning,
        target_deadline: deadline_days.map(|days| Utc::now().naive_utc() + Duration::days(days)),
        assigned_to,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        related_professionals: related_professionals.to_vec(),
        created_by,
        confidential: true,
    }
}

/// The standard five-objective plan materialized the first time a booking's
/// objectives are read.
pub fn standard_objective_plan(booking_id: i64, created_by: i64) -> Vec<NewObjective> {
    vec![
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::Photography,
            "Album Artwork Photography",
            "Capture high-resolution images suitable for album artwork and promotional \
             materials. Focus on artistic shots that reflect the artist's brand and music style.",
            Priority::High,
            Some(7),
            Some(STAFF_PHOTOGRAPHER),
            &["album", "artwork", "promotional", "brand"],
            &[STAFF_PHOTOGRAPHER],
        ),
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::SocialMedia,
            "Instagram/TikTok Content Creation",
            "Generate social media content during the performance for Instagram Stories, \
             TikTok videos, and Facebook posts. Focus on behind-the-scenes content and \
             audience engagement moments.",
            Priority::Medium,
            Some(3),
            Some(STAFF_SOCIAL_MEDIA_SPECIALIST),
            &["social_media", "instagram", "tiktok", "engagement"],
            &[STAFF_SOCIAL_MEDIA_SPECIALIST],
        ),
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::Videography,
            "Performance Documentation",
            "Record full performance for potential music video content and promotional use. \
             Capture multiple angles and audience reactions for comprehensive coverage.",
            Priority::High,
            Some(5),
            Some(STAFF_VIDEOGRAPHER),
            &["video", "performance", "documentation", "promotional"],
            &[STAFF_VIDEOGRAPHER],
        ),
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::Revenue,
            "Merchandise Sales Opportunity",
            "Set up merchandise booth during event to maximize revenue from physical product \
             sales. Target $500+ in merchandise revenue.",
            Priority::Medium,
            None,
            None,
            &["merchandise", "revenue", "sales"],
            &[],
        ),
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::Strategic,
            "Industry Network Building",
            "Identify and connect with industry professionals in attendance. Focus on \
             potential collaboration opportunities and future booking contacts.",
            Priority::Low,
            None,
            None,
            &["networking", "industry", "collaboration"],
            &[],
        ),
    ]
}

/// Objectives generated automatically when a booking involves a managed
/// artist. Exactly three: documentation, social media, revenue.
pub fn managed_artist_auto_objectives(booking_id: i64, created_by: i64) -> Vec<NewObjective> {
    vec![
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::Photography,
            "Professional Documentation",
            "Capture professional-quality images of the performance for press kit and \
             promotional use",
            Priority::High,
            None,
            None,
            &["documentation", "professional", "press_kit"],
            &[],
        ),
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::SocialMedia,
            "Social Media Content Generation",
            "Create engaging social media content during the event to maintain online \
             presence and fan engagement",
            Priority::Medium,
            None,
            None,
            &["social_media", "engagement", "content"],
            &[],
        ),
        plan_objective(
            booking_id,
            created_by,
            ObjectiveType::Revenue,
            "Revenue Optimization",
            "Maximize revenue opportunities through merchandise sales and future booking \
             lead generation",
            Priority::Medium,
            None,
            None,
            &["revenue", "merchandise", "leads"],
            &[],
        ),
    ]
}

fn template_objective(
    title: &str,
    description: &str,
    priority: Priority,
    estimated_duration: &str,
) -> TemplateObjective {
    TemplateObjective {
        title: title.to_string(),
        description: description.to_string(),
        priority,
        estimated_duration: estimated_duration.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The reusable template catalog for quick objective creation.
pub fn builtin_templates() -> Vec<ObjectiveTemplate> {
    vec![
        ObjectiveTemplate {
            id: 1,
            name: "Album Promotion Package".to_string(),
            category: "Marketing".to_string(),
            objectives: vec![
                template_objective(
                    "Professional Photography",
                    "High-resolution album artwork and promotional photos",
                    Priority::High,
                    "2-3 hours",
                ),
                template_objective(
                    "Behind-the-Scenes Video",
                    "Documentary-style content for social media and press",
                    Priority::Medium,
                    "1-2 hours",
                ),
                template_objective(
                    "Social Media Content",
                    "Instagram stories, TikTok videos, and Facebook posts",
                    Priority::High,
                    "Ongoing during event",
                ),
            ],
            applicable_artist_types: strings(&["managed_artist", "artist"]),
            applicable_booking_types: strings(&["album_release", "promotional"]),
        },
        ObjectiveTemplate {
            id: 2,
            name: "Live Performance Documentation".to_string(),
            category: "Content Creation".to_string(),
            objectives: vec![
                template_objective(
                    "Multi-Camera Recording",
                    "Professional multi-angle performance recording",
                    Priority::High,
                    "Full performance",
                ),
                template_objective(
                    "Audience Interaction Capture",
                    "Document audience engagement and reactions",
                    Priority::Medium,
                    "Throughout event",
                ),
                template_objective(
                    "Sound Recording",
                    "High-quality audio recording for potential release",
                    Priority::High,
                    "Full performance",
                ),
            ],
            applicable_artist_types: strings(&["managed_artist", "managed_musician"]),
            applicable_booking_types: strings(&["live_performance", "concert"]),
        },
        ObjectiveTemplate {
            id: 3,
            name: "Brand Development Focus".to_string(),
            category: "Strategic".to_string(),
            objectives: vec![
                template_objective(
                    "Brand Consistency Documentation",
                    "Ensure all content aligns with artist brand guidelines",
                    Priority::High,
                    "Throughout event",
                ),
                template_objective(
                    "Market Research",
                    "Gather audience demographic and engagement data",
                    Priority::Medium,
                    "30 minutes",
                ),
                template_objective(
                    "Networking Opportunities",
                    "Connect with industry professionals in attendance",
                    Priority::Low,
                    "Pre/post event",
                ),
            ],
            applicable_artist_types: strings(&[
                "managed_artist",
                "managed_musician",
                "managed_professional",
            ]),
            applicable_booking_types: strings(&["all"]),
        },
    ]
}

/// Fixed dollar value an objective of the given type is estimated to
/// contribute, used by the report's ROI sum.
pub fn estimated_value(objective_type: ObjectiveType) -> i64 {
    match objective_type {
        ObjectiveType::Photography => 500,
        ObjectiveType::Videography => 1000,
        ObjectiveType::SocialMedia => 300,
        ObjectiveType::Marketing => 750,
        ObjectiveType::Revenue => 1000,
        ObjectiveType::Strategic => 200,
    }
}
