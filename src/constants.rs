//! Application constants for traffic incident analysis
//!
//! Column names, missing-value markers, timestamp formats, time-of-day
//! boundaries and report defaults used throughout the crate.

// =============================================================================
// Source Columns
// =============================================================================

/// Recognized source column names
pub mod columns {
    pub const START_TIME: &str = "Start_Time";
    pub const END_TIME: &str = "End_Time";
    pub const START_LAT: &str = "Start_Lat";
    pub const START_LNG: &str = "Start_Lng";
    pub const WEATHER_CONDITION: &str = "Weather_Condition";
    pub const ROAD_CONDITION: &str = "Road_Condition";
    pub const SEVERITY: &str = "Severity";

    /// Every column the loader interprets; all must appear in the header
    pub const RECOGNIZED: &[&str] = &[
        START_TIME,
        END_TIME,
        START_LAT,
        START_LNG,
        WEATHER_CONDITION,
        ROAD_CONDITION,
        SEVERITY,
    ];
}

/// Field values treated as absent data (compared after trimming)
pub const MISSING_VALUE_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

/// Category label used when Severity is absent
pub const MISSING_CATEGORY_LABEL: &str = "(missing)";

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

// =============================================================================
// Timestamps
// =============================================================================

/// Naive datetime formats tried in order when parsing Start_Time/End_Time
pub const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Offset-aware datetime formats; the wall-clock time at the offset is kept
pub const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Date-only format, interpreted as midnight
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Time of Day
// =============================================================================

/// Half-open hour boundaries: [0,6) Night, [6,12) Morning, [12,18) Afternoon, [18,24) Evening
pub mod time_of_day {
    pub const MORNING_START_HOUR: u32 = 6;
    pub const AFTERNOON_START_HOUR: u32 = 12;
    pub const EVENING_START_HOUR: u32 = 18;
}

// =============================================================================
// Report Defaults
// =============================================================================

pub const DEFAULT_PAGE_TITLE: &str = "Traffic Accident Analysis";

/// Initial zoom level of the hotspot map
pub const DEFAULT_MAP_ZOOM: u8 = 5;
pub const MAX_MAP_ZOOM: u8 = 18;

/// Heat layer point radius and blur, in pixels
pub const DEFAULT_HEAT_RADIUS: u32 = 25;
pub const DEFAULT_HEAT_BLUR: u32 = 15;

/// Output artifact file names
pub mod artifacts {
    pub const WEATHER_CHART: &str = "accidents_by_weather_condition.svg";
    pub const ROAD_CHART: &str = "accidents_by_road_condition.svg";
    pub const TIME_OF_DAY_CHART: &str = "accidents_by_time_of_day.svg";
    pub const SEVERITY_CHART: &str = "accidents_by_severity.svg";
    pub const HOTSPOT_MAP: &str = "accident_hotspots.html";
    pub const REPORT_PAGE: &str = "traffic_accident_analysis.html";
    pub const SUMMARY_JSON: &str = "summary.json";
}

/// Map tiles and heat-layer scripts referenced by the hotspot map
pub mod map_assets {
    pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
    pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
    pub const LEAFLET_HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";
    pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
    pub const TILE_ATTRIBUTION: &str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
}

/// Per-user configuration file location relative to the platform config dir
pub const CONFIG_DIR_NAME: &str = "traffic-report";
pub const CONFIG_FILE_NAME: &str = "config.json";
