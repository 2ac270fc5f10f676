//! Research Links

use leptos::prelude::*;

struct ResearchCard {
    tag: &'static str,
    title: &'static str,
    summary: &'static str,
    href: &'static str,
    link_label: &'static str,
}

static CARDS: [ResearchCard; 4] = [
    ResearchCard {
        tag: "WHEAT",
        title: "Global Grain Density",
        summary: "Impact of heat stress on protein concentration in winter wheat.",
        href: "https://www.fao.org/worldfoodsituation/csdb/en/",
        link_label: "VIEW WHITE PAPER",
    },
    ResearchCard {
        tag: "CORN",
        title: "Maize Genetics",
        summary: "Nitrogen utilization efficiency of modern hybrids.",
        href: "https://www.nature.com/articles/s41598-021-03054-9",
        link_label: "VIEW RESEARCH",
    },
    ResearchCard {
        tag: "RICE",
        title: "Aquatic Nutrients",
        summary: "Methane-reducing cultivation in sub-tropical zones.",
        href: "https://www.sciencedirect.com/journal/field-crops-research",
        link_label: "VIEW JOURNAL",
    },
    ResearchCard {
        tag: "SOYBEAN",
        title: "Carbon Fixation",
        summary: "Symbiosis between soil quality and nitrogen-fixing bacteria.",
        href: "https://www.frontiersin.org/journals/plant-science",
        link_label: "VIEW DATA",
    },
];

#[component]
pub fn ResearchSection() -> impl IntoView {
    view! {
        <div class="info-grid">
            {CARDS
                .iter()
                .map(|card| {
                    view! {
                        <div class="news-card">
                            <div class="date-tag">{card.tag}</div>
                            <h4>{card.title}</h4>
                            <p>{card.summary}</p>
                            <a
                                href=card.href
                                target="_blank"
                                rel="noreferrer"
                                class="read-more"
                            >
                                {card.link_label}
                            </a>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
