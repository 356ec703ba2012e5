use crate::models::{BuyerType, Listing, ListingFilter};

/// Check if a listing passes the viewer's filter controls
///
/// Two criteria, mirroring the budget slider and the buyer selector:
/// a price ceiling hides anything priced above it, and the family buyer
/// category hides listings that report fewer than two bedrooms. Listings
/// without a bedroom count pass the family check.
#[inline]
pub fn matches_filter(listing: &Listing, filter: &ListingFilter) -> bool {
    if let Some(max_budget) = filter.max_budget {
        if listing.price > max_budget {
            return false;
        }
    }

    if filter.buyer_type == Some(BuyerType::Family) {
        if let Some(bedrooms) = listing.bedrooms {
            if bedrooms < 2 {
                return false;
            }
        }
    }

    true
}

/// Apply the filter pass as a linear scan over the listing set
pub fn apply_filters<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches_filter(listing, filter))
        .collect()
}
