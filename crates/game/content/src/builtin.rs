//! Built-in catalog and sample decks.
//!
//! These mirror the files under `data/` so tools can run without a data
//! directory. Loaded content replaces them wholesale.

use starving_core::cards::{MinorWorkBoost, SocialBranch};
use starving_core::{
    ArtPath, CatalogSnapshot, Effect, HomeCard, JobDefinition, MinorWorkKind, MinorWorkTemplate,
    ProCard, ProfDevCard, SocialCard, StartingDecks, Stat, WorkId,
};

const fn stat(stat: Stat, delta: i32) -> Effect {
    Effect::stat(stat, delta)
}

/// The six day jobs.
pub fn builtin_jobs() -> Vec<JobDefinition> {
    use Stat::{Food, Inspiration, Money};

    vec![
        JobDefinition::new(
            "job_teacher",
            "Teacher",
            vec![stat(Money, 1), stat(Inspiration, 2), Effect::time(-2)],
        ),
        JobDefinition::new(
            "job_programmer",
            "Programmer",
            vec![stat(Money, 2), stat(Inspiration, -1), Effect::time(-1)],
        ),
        JobDefinition::new(
            "job_admin",
            "Admin",
            vec![stat(Money, 1), stat(Inspiration, -2), stat(Food, 1)],
        ),
        JobDefinition::new(
            "job_student",
            "Student",
            vec![stat(Money, -1), stat(Food, 1), Effect::time(2)],
        ),
        JobDefinition::new(
            "job_drug_dealer",
            "Drug Dealer",
            vec![stat(Money, 3), stat(Inspiration, 1), Effect::time(-3)],
        ),
        JobDefinition::new(
            "job_volunteer",
            "Volunteer",
            vec![stat(Money, -2), stat(Inspiration, 3), stat(Food, 1)],
        ),
    ]
}

struct PathWorks {
    path: ArtPath,
    quick: (&'static str, &'static str, Effect),
    career: (&'static str, &'static str, Effect),
    spotlight: (&'static str, &'static str, i32),
}

impl PathWorks {
    fn templates(self) -> [MinorWorkTemplate; 3] {
        let template = |id: &str, name: &str, kind: MinorWorkKind| MinorWorkTemplate {
            id: WorkId::from(id),
            name: name.to_owned(),
            art_path: self.path,
            kind,
            progress_target: default_target(kind),
            on_complete_effects: Vec::new(),
            effects_per_turn: Vec::new(),
        };

        let (id, name, reward) = self.quick;
        let quick = MinorWorkTemplate {
            on_complete_effects: vec![reward],
            ..template(id, name, MinorWorkKind::Quick)
        };

        let (id, name, income) = self.career;
        let career = MinorWorkTemplate {
            effects_per_turn: vec![income],
            ..template(id, name, MinorWorkKind::Career)
        };

        let (id, name, payout) = self.spotlight;
        let spotlight = MinorWorkTemplate {
            on_complete_effects: vec![stat(Stat::Money, payout)],
            ..template(id, name, MinorWorkKind::Spotlight)
        };

        [quick, career, spotlight]
    }
}

/// Pips needed to finish a work of `kind`.
pub fn default_target(kind: MinorWorkKind) -> u32 {
    match kind {
        MinorWorkKind::Quick => 2,
        MinorWorkKind::Career => 4,
        MinorWorkKind::Spotlight => 5,
    }
}

/// Quick, Career and Spotlight templates for every art path.
pub fn builtin_minor_works() -> Vec<MinorWorkTemplate> {
    use Stat::{Craft, Inspiration};

    let paths = [
        PathWorks {
            path: ArtPath::Author,
            quick: (
                "mw_author_microfiction_thread",
                "Microfiction Thread / Newsletter Post",
                stat(Inspiration, 2),
            ),
            career: (
                "mw_author_short_story_submission",
                "Short Story Submission",
                stat(Inspiration, 1),
            ),
            spotlight: ("mw_author_chapbook_release", "Chapbook Release", 6),
        },
        PathWorks {
            path: ArtPath::Musician,
            quick: (
                "mw_music_tiktok_cover_loop",
                "TikTok/IG Cover Loop",
                stat(Stat::Money, 3),
            ),
            career: (
                "mw_music_ep_streaming_release",
                "EP (Streaming Release)",
                stat(Craft, 1),
            ),
            spotlight: (
                "mw_music_paid_gig_or_viral_performance",
                "Paid Gig / Viral Performance",
                8,
            ),
        },
        PathWorks {
            path: ArtPath::VisualArtist,
            quick: (
                "mw_visual_speedpaint_reel",
                "Speedpaint Reel / Carousel Post",
                stat(Craft, 2),
            ),
            career: (
                "mw_visual_portfolio_piece_commission_ready",
                "Portfolio Piece (Commission-Ready)",
                stat(Craft, 1),
            ),
            spotlight: ("mw_visual_limited_print_drop", "Limited Print Drop", 6),
        },
        PathWorks {
            path: ArtPath::Filmmaker,
            quick: (
                "mw_film_short_form_reel",
                "Short-Form Reel (30-60s)",
                stat(Inspiration, 2),
            ),
            career: (
                "mw_film_short_film_youtube_premiere",
                "Short Film (YouTube Premiere)",
                stat(Craft, 1),
            ),
            spotlight: (
                "mw_film_festival_cut_submission",
                "Festival Cut + Submission",
                7,
            ),
        },
        PathWorks {
            path: ArtPath::Actor,
            quick: (
                "mw_actor_self_tape_clip",
                "Self-Tape Clip / TikTok Scene",
                stat(Craft, 2),
            ),
            career: (
                "mw_actor_scene_study_tape",
                "Scene Study Tape (Partner/Coach)",
                stat(Inspiration, 1),
            ),
            spotlight: (
                "mw_actor_showcase_booked_role",
                "Showcase Night / Booked Role",
                7,
            ),
        },
        PathWorks {
            path: ArtPath::Dancer,
            quick: (
                "mw_dance_instagram_reel_combo",
                "Instagram Reel Combo",
                stat(Inspiration, 2),
            ),
            career: (
                "mw_dance_choreo_routine_class",
                "Choreo Routine (Class/Studio)",
                stat(Craft, 1),
            ),
            spotlight: (
                "mw_dance_competition_set_paid_gig",
                "Competition Set / Paid Stage Gig",
                7,
            ),
        },
    ];

    paths.into_iter().flat_map(PathWorks::templates).collect()
}

pub fn builtin_catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(builtin_jobs(), builtin_minor_works())
}

fn home(id: &str, name: &str, effects: Vec<Effect>) -> HomeCard {
    HomeCard {
        id: id.into(),
        name: name.to_owned(),
        text: String::new(),
        effects,
    }
}

fn social(id: &str, name: &str, attend: Vec<Effect>, skip: Vec<Effect>) -> SocialCard {
    SocialCard {
        id: id.into(),
        name: name.to_owned(),
        attend: SocialBranch { effects: attend },
        skip: SocialBranch { effects: skip },
        ..SocialCard::default()
    }
}

/// A small playable deck set for simulations and tests.
pub fn sample_decks() -> StartingDecks {
    use Stat::{Craft, Food, Inspiration, Money};

    StartingDecks {
        home: vec![
            home("home_001", "Birthday Check", vec![stat(Money, 2)]),
            home("home_002", "Family Dinner", vec![stat(Food, 2)]),
            home("home_003", "Library Card", vec![stat(Inspiration, 1), stat(Craft, 1)]),
            home("home_004", "Chores", vec![stat(Money, 1), stat(Inspiration, -1)]),
            home("home_005", "Garage Studio", vec![stat(Craft, 2)]),
        ],
        social: vec![
            social(
                "soc_001",
                "Gallery Opening",
                vec![stat(Inspiration, 2), stat(Food, 1)],
                vec![stat(Craft, 1)],
            ),
            social(
                "soc_002",
                "House Party",
                vec![stat(Inspiration, 1), stat(Money, -1)],
                vec![stat(Food, 1)],
            ),
            SocialCard {
                time_cost: Some(2),
                allowed_paths: vec![ArtPath::Musician, ArtPath::Dancer],
                ..social(
                    "soc_003",
                    "Open Mic Night",
                    vec![stat(Inspiration, 2), stat(Craft, 1)],
                    Vec::new(),
                )
            },
            SocialCard {
                blocked_paths: vec![ArtPath::Author],
                ..social(
                    "soc_004",
                    "Influencer Brunch",
                    vec![stat(Money, 2), stat(Inspiration, -1)],
                    vec![stat(Inspiration, 1)],
                )
            },
            social(
                "soc_005",
                "Critique Circle",
                vec![stat(Craft, 2)],
                vec![stat(Inspiration, 1)],
            ),
        ],
        prof_dev: vec![
            ProfDevCard {
                id: "pd_001".into(),
                name: "Weekend Workshop".into(),
                effects: vec![stat(Craft, 1), stat(Money, -1)],
                minor_work: Some(MinorWorkBoost::default()),
                ..ProfDevCard::default()
            },
            ProfDevCard {
                id: "pd_002".into(),
                name: "Mentor Session".into(),
                time_cost: Some(1),
                effects: vec![stat(Inspiration, 2)],
                ..ProfDevCard::default()
            },
            ProfDevCard {
                id: "pd_003".into(),
                name: "Residency Application".into(),
                time_cost: Some(3),
                effects: vec![stat(Craft, 2)],
                minor_work: Some(MinorWorkBoost {
                    kind: Some(MinorWorkKind::Spotlight),
                    progress: 2,
                }),
                ..ProfDevCard::default()
            },
            ProfDevCard {
                id: "pd_004".into(),
                name: "Online Course".into(),
                effects: vec![stat(Craft, 1), stat(Inspiration, 1), stat(Money, -2)],
                ..ProfDevCard::default()
            },
        ],
        pro: vec![
            ProCard {
                id: "pro_001".into(),
                name: "Breakthrough Session".into(),
                effects: vec![Effect::masterwork(2)],
                ..ProCard::default()
            },
            ProCard {
                id: "pro_002".into(),
                name: "Critical Review".into(),
                success_effects: Some(vec![Effect::masterwork(2), stat(Money, 2)]),
                fail_effects: Some(vec![stat(Inspiration, -2)]),
                ..ProCard::default()
            },
            ProCard {
                id: "pro_003".into(),
                name: "Grant Money".into(),
                time_cost: Some(1),
                effects: vec![stat(Money, 4)],
                ..ProCard::default()
            },
            ProCard {
                id: "pro_004".into(),
                name: "Burnout".into(),
                time_cost: Some(2),
                effects: vec![stat(Inspiration, -1), stat(Food, -1)],
                ..ProCard::default()
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starving_core::CatalogOracle;

    #[test]
    fn every_path_has_one_template_per_kind() {
        let catalog = builtin_catalog();
        for path in ArtPath::ALL {
            let kinds: Vec<_> = catalog
                .minor_works(path)
                .iter()
                .map(|template| (template.kind, template.progress_target))
                .collect();
            assert_eq!(
                kinds,
                vec![
                    (MinorWorkKind::Quick, 2),
                    (MinorWorkKind::Career, 4),
                    (MinorWorkKind::Spotlight, 5),
                ],
                "{path}"
            );
        }
    }

    #[test]
    fn career_works_pay_every_turn() {
        let works = builtin_minor_works();
        assert_eq!(works.len(), 18);
        assert!(
            works
                .iter()
                .filter(|template| template.kind == MinorWorkKind::Career)
                .all(|template| !template.effects_per_turn.is_empty())
        );
    }

    #[test]
    fn job_ids_are_unique() {
        let mut ids: Vec<_> = builtin_jobs().into_iter().map(|job| job.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn sample_decks_cover_every_stage() {
        let decks = sample_decks();
        assert!(!decks.home.is_empty());
        assert!(!decks.social.is_empty());
        assert!(!decks.prof_dev.is_empty());
        assert!(decks.pro.iter().any(ProCard::is_branching));
    }
}
