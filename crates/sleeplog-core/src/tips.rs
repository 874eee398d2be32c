//! Static sleep hygiene advice.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SleepTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SLEEP_TIPS: [SleepTip; 6] = [
    SleepTip {
        title: "Maintain a Consistent Schedule",
        description: "Go to bed and wake up at the same time every day, including weekends. This helps regulate your body's internal clock.",
    },
    SleepTip {
        title: "Create a Relaxing Bedtime Routine",
        description: "Develop a pre-sleep ritual such as reading, meditation, or a warm bath to signal to your body that it's time to wind down.",
    },
    SleepTip {
        title: "Optimize Your Sleep Environment",
        description: "Keep your bedroom cool, dark, and quiet. Consider using earplugs, an eye mask, or white noise to block disturbances.",
    },
    SleepTip {
        title: "Limit Caffeine and Alcohol",
        description: "Avoid caffeine late in the day and limit alcohol before bedtime, as both can disrupt your sleep quality and patterns.",
    },
    SleepTip {
        title: "Exercise Regularly",
        description: "Regular physical activity can help you fall asleep faster and enjoy deeper sleep, but avoid vigorous exercise close to bedtime.",
    },
    SleepTip {
        title: "Manage Light Exposure",
        description: "Get plenty of natural sunlight during the day and reduce blue light exposure from screens in the evening.",
    },
];

pub fn sleep_tips() -> &'static [SleepTip] {
    &SLEEP_TIPS
}
