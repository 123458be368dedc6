//! Service Connector identifiers, which hang off an arbitrary ARM scope

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// ScopedLinkerId is a struct representing the Resource ID for a Service Linker within a Scope
    pub struct ScopedLinkerId("Scoped Linker") {
        resource_uri => "resourceUri",
        linker_name => "linkerName",
    }
    segments: [
        Segment::scope("resourceUri"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftServiceLinker", "Microsoft.ServiceLinker"),
        Segment::static_segment("staticLinkers", "linkers"),
        Segment::user_specified("linkerName", "linkerValue"),
    ]
}
