rosrust::rosmsg_include! {
    geometry_msgs / PoseStamped,
    geometry_msgs / TwistStamped
}
