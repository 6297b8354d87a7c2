//! Static layout configuration: drawer width, logo, and route headings.

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;

/// Side navigation drawer width in pixels.
pub const DRAWER_WIDTH: u32 = 240;

pub const LOGO_SRC: &str = "/logo5.png";

/// Page heading shown in the app header for each route.
pub const HEADINGS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/projects", "Projects"),
    ("/timesheet", "Timesheet"),
    ("/purchase-order", "Purchase Order"),
    ("/delivery-docket", "Delivery Docket"),
    ("/forms", "Forms"),
    ("/equipment", "Equipment"),
    ("/resource-assigner", "Resource Assigner"),
    ("/file-manager", "File Manager"),
    ("/user-management", "User Management"),
    ("/settings", "Settings"),
    ("/settings/allowance", "Allowance"),
    ("/settings/categories", "Categories"),
    ("/settings/accounting-codes", "Accounting-Codes"),
    ("/settings/resource-cost-sheet", "Resource Cost Sheet"),
    ("/settings/segments", "Segments"),
    ("/settings/organization", "Organization"),
];

/// Heading for an exact route path. A trailing slash is ignored.
pub fn heading_for(path: &str) -> Option<&'static str> {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { path } else { trimmed };
    HEADINGS.iter().find(|(route, _)| *route == path).map(|(_, heading)| *heading)
}
