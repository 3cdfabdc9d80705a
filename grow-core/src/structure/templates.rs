//! Built-in page templates and headline generators

use std::sync::LazyLock;

use super::{Bound, PageTemplate, SectionSpec};

/// Names accepted by [`template_by_name`]
pub const TEMPLATE_NAMES: [&str; 2] = ["state", "lane"];

static STATE_PAGE: LazyLock<PageTemplate> = LazyLock::new(|| {
    PageTemplate::new(
        "State Page",
        vec![
            SectionSpec::required("h1", "State H1", 1)
                .with_description("Main page heading with state name and abbreviation"),
            SectionSpec::required("intro", "Intro Section", 2)
                .with_word_count(Bound::Range { min: 150, max: 200 })
                .with_description("Freight importance, major industries, owner-operator value"),
            SectionSpec::required("marketOverview", "State Market Overview Section", 3)
                .with_description("Tonnage, rates by equipment, carriers, corridors, ports"),
            SectionSpec::required("topFreightLanes", "Top 15 Freight Lanes", 4)
                .with_item_count(Bound::Exact(15))
                .with_description("Lane, distance, rate, volume, commodities, peak days, deadhead, tip"),
            SectionSpec::required("topCommodities", "Top Commodities Section", 5)
                .with_item_count(Bound::Range { min: 5, max: 7 })
                .with_description("Commodity categories with share, equipment, rate, seasonality"),
            SectionSpec::required("seasonalTrends", "Seasonal Trends Section", 6)
                .with_description("Rate movement, weather impact and strategy per quarter"),
            SectionSpec::required("majorFreightHubs", "Major Freight Hubs Section", 7)
                .with_description("Distribution cities, ports, intermodal centers, border crossings"),
            SectionSpec::required("truckParkingFuel", "Truck Parking & Fuel Section", 8)
                .with_description("Truck stops, parking difficulty, positioning advice"),
            SectionSpec::required("weighStationsRegulations", "Weigh Stations & Regulations Section", 9)
                .with_description("Weight and size limits, state rules, permits, emission laws"),
            SectionSpec::required("rateTrends", "Rate Trends (10-Year Analysis)", 10)
                .with_description("Historical rates, corrections, projection, rate drivers"),
            SectionSpec::required("deadheadStrategy", "Deadhead Strategy Section", 11)
                .with_description("Outbound and inbound share, backhaul lanes, positioning"),
            SectionSpec::required("dispatcherInsights", "Professional Dispatcher Insights", 12)
                .with_item_count(Bound::Range { min: 5, max: 8 })
                .with_description("Experience-based tactical lessons"),
            SectionSpec::required("faq", "FAQ Section", 13)
                .with_item_count(Bound::Range { min: 6, max: 8 })
                .with_description("Questions written for featured snippets"),
            SectionSpec::required("cta", "CTA Section", 14)
                .with_description("Headline and service benefits"),
        ],
    )
});

static LANE_PAGE: LazyLock<PageTemplate> = LazyLock::new(|| {
    PageTemplate::new(
        "Lane Page",
        vec![
            SectionSpec::required("h1", "Lane H1", 1)
                .with_description("Main page heading with origin and destination cities"),
            SectionSpec::required("quickOverview", "Quick Overview", 2)
                .with_word_count(Bound::Exact(150))
                .with_description("Why the lane matters, volume, equipment, consistency"),
            SectionSpec::required("laneStatistics", "Lane Statistics Block", 3)
                .with_description("Distance, rates by equipment, transit time, deadhead risk, booking days"),
            SectionSpec::required("commodities", "What Moves on This Lane?", 4)
                .with_description("Primary, secondary and seasonal cargo"),
            SectionSpec::required("seasonalBehavior", "Seasonal Behavior", 5)
                .with_description("Q1 slowdown, Q4 peak, produce season, hurricane risk"),
            SectionSpec::required("rateNegotiation", "Rate Negotiation Strategy", 6)
                .with_description("When to book, what brokers pay more for, when to avoid"),
            SectionSpec::required("backhaulStrategy", "Backhaul Strategy", 7)
                .with_description("Return cities, deadhead risk, alternative routes"),
            SectionSpec::required("dispatcherTips", "Dispatcher Insider Tips", 8)
                .with_item_count(Bound::Range { min: 2, max: 5 })
                .with_description("Tactical pieces of advice"),
            SectionSpec::required("cta", "CTA Section", 9)
                .with_description("Conversion-focused call to action"),
        ],
    )
});

/// The 14-section state page template
pub fn state_page_template() -> &'static PageTemplate {
    &STATE_PAGE
}

/// The 9-section lane page template
pub fn lane_page_template() -> &'static PageTemplate {
    &LANE_PAGE
}

/// Built-in template by name (`state` or `lane`)
pub fn template_by_name(name: &str) -> Option<&'static PageTemplate> {
    match name.to_ascii_lowercase().as_str() {
        "state" => Some(state_page_template()),
        "lane" => Some(lane_page_template()),
        _ => None,
    }
}

/// "Texas Truck Dispatcher | TX Freight Loads & Dispatch Services"
pub fn state_h1(state_name: &str, abbreviation: &str) -> String {
    format!(
        "{} Truck Dispatcher | {} Freight Loads & Dispatch Services",
        state_name, abbreviation
    )
}

/// "Dallas to Atlanta Freight Loads | Truck Dispatch Services"
pub fn lane_h1(origin: &str, destination: &str) -> String {
    format!("{} to {} Freight Loads | Truck Dispatch Services", origin, destination)
}

pub fn state_cta_headline(state_name: &str) -> String {
    format!("Get Professional {} Truck Dispatching Services", state_name)
}

pub fn lane_cta_headline(origin: &str, destination: &str) -> String {
    format!("Need help running {} to {} consistently?", origin, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shapes() {
        let state = state_page_template();
        assert_eq!(state.sections.len(), 14);
        assert!(state.sections.iter().all(|section| section.required));
        assert_eq!(
            state.section("topFreightLanes").and_then(|s| s.item_count),
            Some(Bound::Exact(15))
        );

        let lane = lane_page_template();
        assert_eq!(lane.sections.len(), 9);
        let orders: Vec<u32> = lane.ordered_sections().iter().map(|s| s.order).collect();
        assert_eq!(orders, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_template_by_name() {
        assert_eq!(template_by_name("State").map(|t| t.name.as_str()), Some("State Page"));
        assert_eq!(template_by_name("lane").map(|t| t.sections.len()), Some(9));
        assert!(template_by_name("partner").is_none());
    }

    #[test]
    fn test_headlines() {
        assert_eq!(
            state_h1("Texas", "TX"),
            "Texas Truck Dispatcher | TX Freight Loads & Dispatch Services"
        );
        assert_eq!(
            lane_h1("Dallas", "Atlanta"),
            "Dallas to Atlanta Freight Loads | Truck Dispatch Services"
        );
        assert_eq!(
            state_cta_headline("Georgia"),
            "Get Professional Georgia Truck Dispatching Services"
        );
        assert_eq!(
            lane_cta_headline("Dallas", "Atlanta"),
            "Need help running Dallas to Atlanta consistently?"
        );
    }
}
