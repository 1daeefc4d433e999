//! Geo reference data: states and districts with center coordinates.
//!
//! Pure data, no behavior beyond lookups. The coverage area matches the
//! deployed sensor network.

use crate::data_model::GeoPoint;

/// A state with its map center
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// A district with its map center
#[derive(Debug, Clone, Copy)]
pub struct District {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl District {
    pub fn center(&self) -> GeoPoint {
        GeoPoint { lat: self.lat, lng: self.lng }
    }
}

pub const STATES: &[State] = &[
    State { name: "Karnataka", lat: 15.3173, lng: 75.7139 },
    State { name: "Maharashtra", lat: 19.7515, lng: 75.7139 },
    State { name: "Tamil Nadu", lat: 11.1271, lng: 78.6569 },
    State { name: "Kerala", lat: 10.8505, lng: 76.2711 },
    State { name: "Telangana", lat: 18.1124, lng: 79.0193 },
    State { name: "Andhra Pradesh", lat: 15.9129, lng: 79.7400 },
    State { name: "Gujarat", lat: 22.2587, lng: 71.1924 },
    State { name: "Rajasthan", lat: 27.0238, lng: 74.2179 },
    State { name: "Uttar Pradesh", lat: 26.8467, lng: 80.9462 },
    State { name: "Delhi", lat: 28.7041, lng: 77.1025 },
];

/// Districts for a state, empty when the state is unknown
pub fn districts_of(state: &str) -> &'static [District] {
    match state {
        "Karnataka" => &[
            District { name: "Bengaluru Urban", lat: 12.9716, lng: 77.5946 },
            District { name: "Mysuru", lat: 12.2958, lng: 76.6394 },
            District { name: "Mangaluru", lat: 12.9141, lng: 74.8560 },
            District { name: "Hubli-Dharwad", lat: 15.3647, lng: 75.1240 },
            District { name: "Belagavi", lat: 15.8497, lng: 74.4977 },
        ],
        "Maharashtra" => &[
            District { name: "Mumbai", lat: 19.0760, lng: 72.8777 },
            District { name: "Pune", lat: 18.5204, lng: 73.8567 },
            District { name: "Nagpur", lat: 21.1458, lng: 79.0882 },
            District { name: "Nashik", lat: 19.9975, lng: 73.7898 },
            District { name: "Thane", lat: 19.2183, lng: 72.9781 },
        ],
        "Tamil Nadu" => &[
            District { name: "Chennai", lat: 13.0827, lng: 80.2707 },
            District { name: "Coimbatore", lat: 11.0168, lng: 76.9558 },
            District { name: "Madurai", lat: 9.9252, lng: 78.1198 },
            District { name: "Tiruchirappalli", lat: 10.7905, lng: 78.7047 },
            District { name: "Salem", lat: 11.6643, lng: 78.1460 },
        ],
        "Kerala" => &[
            District { name: "Thiruvananthapuram", lat: 8.5241, lng: 76.9366 },
            District { name: "Kochi", lat: 9.9312, lng: 76.2673 },
            District { name: "Kozhikode", lat: 11.2588, lng: 75.7804 },
            District { name: "Thrissur", lat: 10.5276, lng: 76.2144 },
            District { name: "Kannur", lat: 11.8745, lng: 75.3704 },
        ],
        "Telangana" => &[
            District { name: "Hyderabad", lat: 17.3850, lng: 78.4867 },
            District { name: "Warangal", lat: 17.9784, lng: 79.5941 },
            District { name: "Nizamabad", lat: 18.6725, lng: 78.0941 },
            District { name: "Karimnagar", lat: 18.4386, lng: 79.1288 },
            District { name: "Khammam", lat: 17.2473, lng: 80.1514 },
        ],
        "Andhra Pradesh" => &[
            District { name: "Visakhapatnam", lat: 17.6868, lng: 83.2185 },
            District { name: "Vijayawada", lat: 16.5062, lng: 80.6480 },
            District { name: "Guntur", lat: 16.3067, lng: 80.4365 },
            District { name: "Tirupati", lat: 13.6288, lng: 79.4192 },
            District { name: "Nellore", lat: 14.4426, lng: 79.9865 },
        ],
        "Gujarat" => &[
            District { name: "Ahmedabad", lat: 23.0225, lng: 72.5714 },
            District { name: "Surat", lat: 21.1702, lng: 72.8311 },
            District { name: "Vadodara", lat: 22.3072, lng: 73.1812 },
            District { name: "Rajkot", lat: 22.3039, lng: 70.8022 },
            District { name: "Gandhinagar", lat: 23.2156, lng: 72.6369 },
        ],
        "Rajasthan" => &[
            District { name: "Jaipur", lat: 26.9124, lng: 75.7873 },
            District { name: "Jodhpur", lat: 26.2389, lng: 73.0243 },
            District { name: "Udaipur", lat: 24.5854, lng: 73.7125 },
            District { name: "Kota", lat: 25.2138, lng: 75.8648 },
            District { name: "Ajmer", lat: 26.4499, lng: 74.6399 },
        ],
        "Uttar Pradesh" => &[
            District { name: "Lucknow", lat: 26.8467, lng: 80.9462 },
            District { name: "Kanpur", lat: 26.4499, lng: 80.3319 },
            District { name: "Varanasi", lat: 25.3176, lng: 82.9739 },
            District { name: "Agra", lat: 27.1767, lng: 78.0081 },
            District { name: "Noida", lat: 28.5355, lng: 77.3910 },
        ],
        "Delhi" => &[
            District { name: "Central Delhi", lat: 28.6448, lng: 77.2167 },
            District { name: "South Delhi", lat: 28.5244, lng: 77.2090 },
            District { name: "North Delhi", lat: 28.7325, lng: 77.1994 },
            District { name: "East Delhi", lat: 28.6280, lng: 77.2950 },
            District { name: "West Delhi", lat: 28.6517, lng: 77.0568 },
        ],
        _ => &[],
    }
}

/// Center coordinates of a district, if both names are known
pub fn district_center(state: &str, district: &str) -> Option<GeoPoint> {
    districts_of(state)
        .iter()
        .find(|d| d.name == district)
        .map(|d| d.center())
}
