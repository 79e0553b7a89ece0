//! Conditional persona guidance.
//!
//! Some personas change what they say depending on the detected emotions, the
//! intensity and the entry itself (Papa's advice for anger differs from his advice
//! for sadness; the counselor adds crisis lines and a legal alert). Each persona row
//! carries a list of [`GuidanceBlock`]s; every block contributes the text of its first
//! matching rule, or its `otherwise` text, to the `{guidance}` placeholder.

use std::fmt;

use crate::models::entry::SentimentResult;

/// What guidance rules get to look at.
#[derive(Debug, Clone, Copy)]
pub struct GuidanceSignals<'a> {
    pub emotions: &'a [String],
    pub intensity: u8,
    /// Entry text, lowercased.
    pub entry_lower: &'a str,
}

impl<'a> GuidanceSignals<'a> {
    pub fn new(analysis: &'a SentimentResult, entry_lower: &'a str) -> Self {
        Self {
            emotions: &analysis.emotions,
            intensity: analysis.intensity,
            entry_lower,
        }
    }

    fn has(&self, emotion: &str) -> bool {
        self.emotions.iter().any(|e| e == emotion)
    }

    fn has_any(&self, emotions: &[&str]) -> bool {
        emotions.iter().any(|e| self.has(e))
    }
}

pub struct GuidanceRule {
    pub applies: fn(&GuidanceSignals<'_>) -> bool,
    pub text: &'static str,
}

impl fmt::Debug for GuidanceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuidanceRule").field("text", &self.text).finish()
    }
}

/// First matching rule wins; `otherwise` may be empty, in which case the block adds nothing.
#[derive(Debug)]
pub struct GuidanceBlock {
    pub rules: &'static [GuidanceRule],
    pub otherwise: &'static str,
}

impl GuidanceBlock {
    fn select(&self, signals: &GuidanceSignals<'_>) -> &'static str {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(signals))
            .map_or(self.otherwise, |rule| rule.text)
    }
}

/// Renders the blocks in order, one paragraph each, skipping empty selections.
pub fn render_guidance(blocks: &[GuidanceBlock], signals: &GuidanceSignals<'_>) -> String {
    blocks
        .iter()
        .map(|block| block.select(signals))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

const CYBER_EXPLOITATION_PHRASES: &[&str] = &[
    "inappropriate pics",
    "inappropriate photos",
    "blackmail",
    "threatening",
    "sextortion",
    "revenge porn",
    "intimate images",
    "someone is using my photos",
];

/// True when the entry describes image-based abuse or extortion.
pub fn mentions_cyber_exploitation(entry_lower: &str) -> bool {
    CYBER_EXPLOITATION_PHRASES
        .iter()
        .any(|p| entry_lower.contains(p))
        || (entry_lower.contains("photos") && entry_lower.contains("send"))
        || (entry_lower.contains("pics") && entry_lower.contains("ask"))
}

pub const CYBER_CRIME_HELPLINE: &str = "1930";
pub const CRISIS_HELPLINE: &str = "1800-599-0019";
pub const MENTAL_HEALTH_LINE: &str = "1075";

// ── Dad ────────────────────────────────────────────────────────────────────

pub static DAD_INCIDENT_INSIGHT: &[GuidanceBlock] = &[GuidanceBlock {
    rules: &[
        GuidanceRule {
            applies: |s| s.has("angry"),
            text: "Papa's angle on the anger: gussa natural hai, but think with a thanda dimag. Decisions made in anger go wrong. Take a deep breath first, then decide what to do next.",
        },
        GuidanceRule {
            applies: |s| s.has("sad"),
            text: "Papa's angle on the sadness: Papa's heart hurts seeing you sad, but life has ups and downs and strong people bounce back. Cry if you need to, then get up and fight.",
        },
        GuidanceRule {
            applies: |s| s.has("anxious"),
            text: "Papa's angle on the worry: overthinking solves nothing. Papa has faced problems for years and a solution always comes. Make an action plan and solve it step by step.",
        },
        GuidanceRule {
            applies: |s| s.has_any(&["happy", "excited"]),
            text: "Papa's angle on the good news: Papa is proud. Enjoy it, but stay grounded and humble, and keep working hard like this.",
        },
    ],
    otherwise: "Papa's angle: whatever you are feeling is okay. Papa may not understand every emotion, but my child is strong. Every problem has a solution, it just needs patience.",
}];

pub static DAD_DAILY_INSIGHT: &[GuidanceBlock] = &[GuidanceBlock {
    rules: &[
        GuidanceRule {
            applies: |s| s.has_any(&["happy", "grateful"]),
            text: "Papa is happy to see you positive. When the time is good, share it with family, thank God and help someone who is struggling.",
        },
        GuidanceRule {
            applies: |s| s.has_any(&["stressed", "overwhelmed"]),
            text: "Papa can see you are taking too much pressure. Life needs balance: work matters, but so do health and family. Take a break, go for a walk, eat proper food.",
        },
        GuidanceRule {
            applies: |s| s.has_any(&["lonely", "sad"]),
            text: "Papa's heart is heavy. Papa and Mummy are always here, so don't feel alone. Call home more often and spend time with family.",
        },
    ],
    otherwise: "Papa sees you trying your best, and that makes Papa proud. Whatever the struggle, the values you grew up with will guide you.",
}];

pub static DAD_INCIDENT_SUGGESTIONS: &[GuidanceBlock] = &[GuidanceBlock {
    rules: &[
        GuidanceRule {
            applies: |s| s.has("angry"),
            text: "Focus on the anger: go for a walk or do something physical, talk to Papa and Mummy, and make no decision until you have cooled down.",
        },
        GuidanceRule {
            applies: |s| s.has("sad"),
            text: "Focus on the sadness: dukh is part of life. Cry if needed, then get up again. Remind them they are Papa's strong child.",
        },
        GuidanceRule {
            applies: |s| s.has("anxious"),
            text: "Focus on the worry: write the problems down, make an action plan and solve them step by step. Papa's blessings are with you, dar mat.",
        },
        GuidanceRule {
            applies: |s| s.has_any(&["stressed", "overwhelmed"]),
            text: "Focus on the stress: if the load feels heavy, take a break. Proper food, sleep and exercise come first.",
        },
    ],
    otherwise: "General Papa guidance: be honest, work hard and respect others. Problems are temporary, character is permanent.",
}];

pub static DAD_DAILY_SUGGESTIONS: &[GuidanceBlock] = &[GuidanceBlock {
    rules: &[
        GuidanceRule {
            applies: |s| s.has_any(&["happy", "grateful"]),
            text: "For a good day: stay grateful, help others and stay humble. Good times come and go, good character stays.",
        },
        GuidanceRule {
            applies: |s| s.has("tired"),
            text: "For tiredness: rest is a necessity, not a luxury. Proper sleep, home food and family time bring the energy back.",
        },
        GuidanceRule {
            applies: |s| s.has("excited"),
            text: "For high energy: enthusiasm is good but patience matters too. Channel it into realistic plans.",
        },
    ],
    otherwise: "For an ordinary day: put extraordinary effort into ordinary days. Success comes from consistency, not occasional bursts.",
}];

// ── Counselor ──────────────────────────────────────────────────────────────

const CYBER_ALERT_INSIGHT: GuidanceRule = GuidanceRule {
    applies: |s| mentions_cyber_exploitation(s.entry_lower),
    text: "Legal and safety alert: what is described is a crime (cyber exploitation) and needs law enforcement. Cyber Crime helpline: 1930. Online reporting: cybercrime.gov.in. Save all evidence before blocking contact. If under 18: Child Protection 1098. State clearly that this is not their fault and they are the victim of a crime.",
};

pub static COUNSELOR_INCIDENT_INSIGHT: &[GuidanceBlock] = &[
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| s.intensity >= 8,
                text: "Safety assessment: distress is high and needs immediate attention. Recommend crisis support now: National Suicide Prevention 1800-599-0019 (24/7), or the nearest emergency department.",
            },
            GuidanceRule {
                applies: |s| s.has("sad") && s.intensity >= 6,
                text: "Safety assessment: the intensity suggests additional professional support would help. Mental Health Crisis Line 1075 offers immediate assistance and referrals.",
            },
        ],
        otherwise: "Safety assessment: the distress is significant, but the ability to reflect like this shows some capacity for emotional regulation.",
    },
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| s.has("anxious"),
                text: "Clinical observation: anxiety is a physiological response to perceived threat. Suggest progressive muscle relaxation, 5-4-3-2-1 sensory grounding and controlled breathing.",
            },
            GuidanceRule {
                applies: |s| s.has("angry"),
                text: "Clinical observation: anger often signals a crossed boundary or an unmet need. Suggest a time-out before responding to triggers, physical movement and journaling.",
            },
            GuidanceRule {
                applies: |s| s.has("sad"),
                text: "Clinical observation: sadness is a natural response to loss or disappointment. Emphasize self-compassion and basic self-care: nutrition, sleep, hygiene.",
            },
        ],
        otherwise: "Clinical observation: the emotional responses appear within normal parameters for processing this kind of experience.",
    },
    GuidanceBlock {
        rules: &[CYBER_ALERT_INSIGHT],
        otherwise: "",
    },
];

pub static COUNSELOR_DAILY_INSIGHT: &[GuidanceBlock] = &[
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| s.intensity >= 8,
                text: "Current status: high alert. Emotional dysregulation present, immediate intervention recommended.",
            },
            GuidanceRule {
                applies: |s| s.intensity >= 6,
                text: "Current status: clinical attention. Elevated emotional activation, proactive support indicated.",
            },
            GuidanceRule {
                applies: |s| s.intensity >= 4,
                text: "Current status: monitoring. Moderate emotional fluctuation within normal range.",
            },
        ],
        otherwise: "Current status: stable. Good emotional regulation and awareness.",
    },
    GuidanceBlock {
        rules: &[GuidanceRule {
            applies: |s| s.has_any(&["sad", "lonely", "tired"]),
            text: "Depression screening: some depressive symptoms below clinical threshold. Track symptoms for two weeks; behavioral activation, social connection and physical activity; reassess if they persist.",
        }],
        otherwise: "Depression screening: no indicators.",
    },
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| s.has_any(&["anxious", "overwhelmed"]),
                text: "Anxiety screening: clinical anxiety symptoms present. Recommend CBT, breathing exercises and progressive muscle relaxation. Mental Health Crisis line: 1075.",
            },
            GuidanceRule {
                applies: |s| s.has("stressed"),
                text: "Anxiety screening: manageable stress response. Daily ten-minute mindfulness, exercise, sleep hygiene, time management and boundary setting.",
            },
        ],
        otherwise: "Anxiety screening: within normal limits.",
    },
];

pub static COUNSELOR_INCIDENT_SUGGESTIONS: &[GuidanceBlock] = &[
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| mentions_cyber_exploitation(s.entry_lower),
                text: "Critical safety alert: this is criminal victimization (cyber exploitation). Include: report to Cyber Crime 1930 or cybercrime.gov.in; screenshot all communication before blocking; if a minor, Child Protection 1098; consider victim advocacy services. It is not their fault.",
            },
            GuidanceRule {
                applies: |s| s.intensity >= 8,
                text: "Crisis intervention: include contacting the crisis hotline 1800-599-0019 (24/7) or the nearest emergency department, a safety plan with a trusted person, and an urgent professional evaluation.",
            },
            GuidanceRule {
                applies: |s| s.intensity >= 6 || s.has("overwhelmed"),
                text: "Elevated support: include the Mental Health Crisis line 1075, scheduling counseling within a week, activating the support network and daily mood tracking.",
            },
        ],
        otherwise: "Therapeutic support: responses are in a manageable range; include practical professional coping strategies.",
    },
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| s.has("anxious"),
                text: "Anxiety protocol: 4-7-8 breathing, 5-4-3-2-1 grounding, challenging catastrophic thoughts, progressive muscle relaxation, CBT for the long term.",
            },
            GuidanceRule {
                applies: |s| s.has("angry"),
                text: "Anger strategies: leave the triggering environment for twenty minutes, physical activity, \"I feel\" statements, assertiveness over aggression, journaling the needs under the anger.",
            },
            GuidanceRule {
                applies: |s| s.has("sad"),
                text: "Low mood plan: schedule one pleasant activity today, keep hygiene, food and sleep steady, reach out to one supportive person within a day, practice self-compassion.",
            },
        ],
        otherwise: "Emotional regulation: present-moment awareness, naming emotions without judgment, healthy self-soothing, staying connected to support.",
    },
];

pub static COUNSELOR_DAILY_SUGGESTIONS: &[GuidanceBlock] = &[
    GuidanceBlock {
        rules: &[GuidanceRule {
            applies: |s| mentions_cyber_exploitation(s.entry_lower),
            text: "Legal and safety intervention: this involves cyber exploitation. Report to Cyber Crime 1930 or cybercrime.gov.in. Trauma-informed therapy is recommended; they are not at fault.",
        }],
        otherwise: "",
    },
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| s.intensity >= 7,
                text: "High acuity: increase session frequency and build a safety plan with specific coping strategies and emergency contacts.",
            },
            GuidanceRule {
                applies: |s| s.intensity >= 5,
                text: "Moderate concern: regular counseling focused on emotion regulation skills.",
            },
        ],
        otherwise: "Maintenance phase: keep building emotional awareness and coping strategies.",
    },
    GuidanceBlock {
        rules: &[
            GuidanceRule {
                applies: |s| s.has_any(&["anxious", "overwhelmed"]),
                text: "For anxiety: CBT, five minutes of daily meditation, exercise, sleep hygiene, less caffeine, grounding techniques.",
            },
            GuidanceRule {
                applies: |s| s.has("angry"),
                text: "For anger: identify triggers, time-out techniques, assertiveness and \"I\" statements, regular physical activity.",
            },
            GuidanceRule {
                applies: |s| s.has_any(&["sad", "lonely"]),
                text: "For sadness: allow grieving while keeping routines, increase social connection, explore values and purpose.",
            },
            GuidanceRule {
                applies: |s| s.has_any(&["happy", "grateful"]),
                text: "For positive emotion: savoring, a daily three-item gratitude journal, flow activities, sharing good moments with others.",
            },
        ],
        otherwise: "General wellness: regular emotional check-ins, healthy coping, meaningful relationships, therapy as prevention.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(emotions: &[&str], intensity: u8) -> SentimentResult {
        SentimentResult {
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            intensity,
            ..SentimentResult::unanalyzed()
        }
    }

    fn render(blocks: &[GuidanceBlock], a: &SentimentResult, entry: &str) -> String {
        let lower = entry.to_lowercase();
        render_guidance(blocks, &GuidanceSignals::new(a, &lower))
    }

    #[test]
    fn test_cyber_exploitation_phrases() {
        assert!(mentions_cyber_exploitation("he said he would blackmail me"));
        assert!(mentions_cyber_exploitation("he wants me to send photos"));
        assert!(mentions_cyber_exploitation("he keeps asking for pics"));
        assert!(!mentions_cyber_exploitation("i posted photos of the trip"));
        assert!(!mentions_cyber_exploitation("a normal day at work"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let a = analysis(&["sad", "angry"], 3);
        let text = render(DAD_INCIDENT_INSIGHT, &a, "bad day");
        assert!(text.contains("gussa natural hai"));
        assert!(!text.contains("Cry if you need to"));
    }

    #[test]
    fn test_otherwise_when_nothing_matches() {
        let a = analysis(&["calm"], 2);
        assert!(render(DAD_DAILY_SUGGESTIONS, &a, "quiet day").starts_with("For an ordinary day"));
    }

    #[test]
    fn test_empty_otherwise_adds_nothing() {
        let a = analysis(&[], 1);
        let text = render(COUNSELOR_DAILY_SUGGESTIONS, &a, "quiet day");
        assert!(text.starts_with("Maintenance phase"));
        assert_eq!(text.split("\n\n").count(), 2);
        assert!(!text.contains(CYBER_CRIME_HELPLINE));
    }

    #[test]
    fn test_counselor_incident_crisis_tiers() {
        let high = render(COUNSELOR_INCIDENT_INSIGHT, &analysis(&["sad"], 8), "x");
        assert!(high.contains(CRISIS_HELPLINE));

        let elevated = render(COUNSELOR_INCIDENT_INSIGHT, &analysis(&["sad"], 6), "x");
        assert!(elevated.contains(MENTAL_HEALTH_LINE));
        assert!(!elevated.contains(CRISIS_HELPLINE));

        let angry_six = render(COUNSELOR_INCIDENT_INSIGHT, &analysis(&["angry"], 6), "x");
        assert!(angry_six.contains("capacity for emotional regulation"));
    }

    #[test]
    fn test_counselor_daily_status_tiers() {
        let status = |i| render(COUNSELOR_DAILY_INSIGHT, &analysis(&[], i), "x");
        assert!(status(9).starts_with("Current status: high alert"));
        assert!(status(6).starts_with("Current status: clinical attention"));
        assert!(status(4).starts_with("Current status: monitoring"));
        assert!(status(3).starts_with("Current status: stable"));
    }

    #[test]
    fn test_cyber_alert_takes_precedence_in_incident_suggestions() {
        let a = analysis(&["anxious"], 9);
        let text = render(COUNSELOR_INCIDENT_SUGGESTIONS, &a, "This is sextortion");
        assert!(text.starts_with("Critical safety alert"));
        assert!(text.contains("cybercrime.gov.in"));
        assert!(!text.contains(CRISIS_HELPLINE));
    }
}
