#[cfg(test)]
mod tests {
    use crate::error::DomainError;
    use crate::types::*;
    use serde_json::json;

    #[test]
    fn subscription_id_trims_whitespace() {
        let id = SubscriptionId::new("  0000-1111  ").unwrap();
        assert_eq!(id.as_str(), "0000-1111");
    }

    #[test]
    fn subscription_id_rejects_empty() {
        assert_eq!(SubscriptionId::new(""), Err(DomainError::EmptySubscriptionId));
        assert_eq!(SubscriptionId::new("   "), Err(DomainError::EmptySubscriptionId));
    }

    #[test]
    fn subscription_id_deserialize_validates() {
        let ok: SubscriptionId = serde_json::from_value(json!("sub-1")).unwrap();
        assert_eq!(ok.as_str(), "sub-1");
        assert!(serde_json::from_value::<SubscriptionId>(json!("")).is_err());
    }

    #[test]
    fn group_ref_rejects_each_empty_parameter() {
        assert_eq!(
            RuleCollectionGroupRef::new("", "p", "g"),
            Err(DomainError::EmptyParameter("resourceGroupName"))
        );
        assert_eq!(
            RuleCollectionGroupRef::new("rg", "", "g"),
            Err(DomainError::EmptyParameter("firewallPolicyName"))
        );
        assert_eq!(
            RuleCollectionGroupRef::new("rg", "p", ""),
            Err(DomainError::EmptyParameter("ruleCollectionGroupName"))
        );
    }

    #[test]
    fn group_ref_display() {
        let r = RuleCollectionGroupRef::new("rg", "policy", "group-A").unwrap();
        assert_eq!(r.to_string(), "rg/policy/group-A");
    }

    #[test]
    fn record_from_full_arm_body() {
        let body = json!({
            "id": "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/firewallPolicies/p/ruleCollectionGroups/group-A",
            "name": "group-A",
            "type": "Microsoft.Network/FirewallPolicies/RuleCollectionGroups",
            "etag": "W/\"abc\"",
            "properties": {
                "priority": 100,
                "provisioningState": "Succeeded",
                "ruleCollections": []
            }
        });
        let rec = RuleCollectionGroupRecord::from_arm(&body).unwrap();
        assert_eq!(rec.name, "group-A");
        assert_eq!(rec.priority, Some(100));
        assert_eq!(rec.provisioning_state.as_deref(), Some("Succeeded"));
        assert_eq!(rec.etag.as_deref(), Some("W/\"abc\""));
    }

    #[test]
    fn record_without_name_is_an_error() {
        let err = RuleCollectionGroupRecord::from_arm(&json!({ "properties": {} })).unwrap_err();
        assert!(matches!(err, DomainError::MissingName(_)));
    }

    #[test]
    fn record_minimal_body_leaves_optionals_empty() {
        let rec = RuleCollectionGroupRecord::from_arm(&json!({ "name": "g" })).unwrap();
        assert_eq!(rec.id, None);
        assert_eq!(rec.priority, None);
        assert_eq!(rec.provisioning_state, None);
    }
}
