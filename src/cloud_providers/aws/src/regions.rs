//! Static region metadata, available without network access.

use std::collections::BTreeMap;

use crate::types::region::Region;

/// Region id to region id, for every region of a partition.
pub type RegionMap = BTreeMap<String, String>;

/// A provider-defined group of regions.
pub trait Partition: Send + Sync {
    fn regions(&self) -> Vec<Region>;

    fn region(&self, id: &str) -> Option<Region> {
        self.regions().into_iter().find(|region| region.id() == id)
    }
}

/// The standard `aws` partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsPartition;

const AWS_REGIONS: &[(&str, &str)] = &[
    ("af-south-1", "Africa (Cape Town)"),
    ("ap-east-1", "Asia Pacific (Hong Kong)"),
    ("ap-northeast-1", "Asia Pacific (Tokyo)"),
    ("ap-northeast-2", "Asia Pacific (Seoul)"),
    ("ap-northeast-3", "Asia Pacific (Osaka)"),
    ("ap-south-1", "Asia Pacific (Mumbai)"),
    ("ap-south-2", "Asia Pacific (Hyderabad)"),
    ("ap-southeast-1", "Asia Pacific (Singapore)"),
    ("ap-southeast-2", "Asia Pacific (Sydney)"),
    ("ap-southeast-3", "Asia Pacific (Jakarta)"),
    ("ap-southeast-4", "Asia Pacific (Melbourne)"),
    ("ap-southeast-5", "Asia Pacific (Malaysia)"),
    ("ap-southeast-7", "Asia Pacific (Thailand)"),
    ("ca-central-1", "Canada (Central)"),
    ("ca-west-1", "Canada West (Calgary)"),
    ("eu-central-1", "EU (Frankfurt)"),
    ("eu-central-2", "EU (Zurich)"),
    ("eu-north-1", "EU (Stockholm)"),
    ("eu-south-1", "EU (Milan)"),
    ("eu-south-2", "EU (Spain)"),
    ("eu-west-1", "EU (Ireland)"),
    ("eu-west-2", "EU (London)"),
    ("eu-west-3", "EU (Paris)"),
    ("il-central-1", "Israel (Tel Aviv)"),
    ("me-central-1", "Middle East (UAE)"),
    ("me-south-1", "Middle East (Bahrain)"),
    ("mx-central-1", "Mexico (Central)"),
    ("sa-east-1", "South America (Sao Paulo)"),
    ("us-east-1", "US East (N. Virginia)"),
    ("us-east-2", "US East (Ohio)"),
    ("us-west-1", "US West (N. California)"),
    ("us-west-2", "US West (Oregon)"),
];

impl Partition for AwsPartition {
    fn regions(&self) -> Vec<Region> {
        AWS_REGIONS
            .iter()
            .map(|(id, description)| Region::new(*id, *description))
            .collect()
    }
}

pub fn region_map(partition: &dyn Partition) -> RegionMap {
    partition
        .regions()
        .into_iter()
        .map(|region| (region.id().to_string(), region.id().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aws_partition_lookup() {
        let region = AwsPartition.region("us-east-1").unwrap();
        assert_eq!(region.description(), "US East (N. Virginia)");

        let region = AwsPartition.region("eu-west-1").unwrap();
        assert_eq!(region.description(), "EU (Ireland)");

        assert!(AwsPartition.region("mars-north-1").is_none());
        assert!(AwsPartition.region("").is_none());
    }

    #[test]
    fn test_recent_regions_resolve() {
        let expected = [
            ("ap-south-2", "Asia Pacific (Hyderabad)"),
            ("ap-southeast-3", "Asia Pacific (Jakarta)"),
            ("ap-southeast-4", "Asia Pacific (Melbourne)"),
            ("ca-west-1", "Canada West (Calgary)"),
            ("eu-central-2", "EU (Zurich)"),
            ("eu-south-2", "EU (Spain)"),
            ("il-central-1", "Israel (Tel Aviv)"),
            ("me-central-1", "Middle East (UAE)"),
        ];

        for (id, description) in expected {
            let region = AwsPartition
                .region(id)
                .unwrap_or_else(|| panic!("{} should be part of the aws partition", id));
            assert_eq!(region.description(), description);
        }
    }

    #[test]
    fn test_region_ids_are_unique() {
        let regions = region_map(&AwsPartition);
        assert_eq!(regions.len(), AwsPartition.regions().len());
    }

    #[test]
    fn test_aws_partition_region_map() {
        let regions = region_map(&AwsPartition);

        assert_eq!(regions.len(), AWS_REGIONS.len());
        assert!(regions.iter().all(|(key, id)| key == id));
        assert_eq!(regions.get("us-west-2").map(String::as_str), Some("us-west-2"));
    }
}
