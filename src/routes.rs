//! Static route catalog backing the purchase selection
pub struct Route {
    pub id: &'static str,
    pub name: &'static str,
    pub stops: u32,
}

pub const ROUTES: [Route; 5] = [
    Route {
        id: "101",
        name: "Downtown Express",
        stops: 15,
    },
    Route {
        id: "202",
        name: "Market Circle",
        stops: 12,
    },
    Route {
        id: "303",
        name: "Riverside Route",
        stops: 18,
    },
    Route {
        id: "404",
        name: "University Line",
        stops: 10,
    },
    Route {
        id: "505",
        name: "Airport Shuttle",
        stops: 8,
    },
];

impl Route {
    /// The selection string copied onto tickets, e.g. "101 - Downtown Express".
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }
}

pub fn find(id: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.id == id)
}

/// Case-insensitive match on route id or name.
pub fn search(term: &str) -> Vec<&'static Route> {
    let term = term.to_lowercase();

    ROUTES
        .iter()
        .filter(|route| route.id.contains(&term) || route.name.to_lowercase().contains(&term))
        .collect()
}
